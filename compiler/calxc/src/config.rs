//! Console configuration from command-line flags and the environment.

use calx_diagnostic::emitter::ColorMode;
use calx_eval::EvalConfig;
use calx_types::CheckerConfig;

/// Settings shared by every console command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub color: ColorMode,
    /// Depth limit for both type checking and evaluation.
    pub max_depth: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            color: ColorMode::Auto,
            max_depth: CheckerConfig::default().max_depth,
        }
    }
}

impl ConsoleConfig {
    /// Consume the flags this config understands, returning the remaining
    /// arguments in order.
    ///
    /// `no_color_env` is the value of `NO_COLOR`; any non-empty value turns
    /// colors off unless `--color` is given.
    pub fn from_args(
        args: &[String],
        no_color_env: Option<&str>,
    ) -> Result<(Self, Vec<String>), String> {
        let mut config = ConsoleConfig::default();
        if no_color_env.is_some_and(|value| !value.is_empty()) {
            config.color = ColorMode::Never;
        }

        let mut rest = Vec::new();
        for arg in args {
            if arg == "--no-color" {
                config.color = ColorMode::Never;
            } else if arg == "--color" {
                config.color = ColorMode::Always;
            } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                config.max_depth = match depth.parse::<usize>() {
                    Ok(depth) if depth > 0 => depth,
                    _ => return Err(format!("invalid value for --max-depth: `{depth}`")),
                };
            } else {
                rest.push(arg.clone());
            }
        }
        Ok((config, rest))
    }

    pub fn checker(&self) -> CheckerConfig {
        CheckerConfig {
            max_depth: self.max_depth,
        }
    }

    pub fn evaluator(&self) -> EvalConfig {
        EvalConfig {
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn flags_are_consumed() {
        let flags = args(&["eval", "--no-color", "1 + 1", "--max-depth=64"]);
        let (config, rest) = ConsoleConfig::from_args(&flags, None).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.max_depth, 64);
        assert_eq!(config.evaluator().max_depth, 64);
        assert_eq!(rest, args(&["eval", "1 + 1"]));
    }

    #[test]
    fn no_color_environment() {
        let (config, _) = ConsoleConfig::from_args(&[], Some("1")).unwrap();
        assert_eq!(config.color, ColorMode::Never);
        let (config, _) = ConsoleConfig::from_args(&[], Some("")).unwrap();
        assert_eq!(config.color, ColorMode::Auto);
        let (config, _) = ConsoleConfig::from_args(&args(&["--color"]), Some("1")).unwrap();
        assert_eq!(config.color, ColorMode::Always);
    }

    #[test]
    fn bad_depth_is_rejected() {
        assert!(ConsoleConfig::from_args(&args(&["--max-depth=zero"]), None).is_err());
        assert!(ConsoleConfig::from_args(&args(&["--max-depth=0"]), None).is_err());
    }
}
