//! "Did you mean?" suggestions for unknown names.
//!
//! Candidates are every name visible from the scope where the lookup failed.

use calx_ir::{Name, SymbolTable};

/// Suggest a visible name close to `unknown`.
pub fn suggest_name(scope: &SymbolTable, unknown: &str) -> Option<Name> {
    let names = scope.visible_names();
    suggest_similar(unknown, names.iter().map(Name::as_str)).map(Name::from)
}

/// Calculate Levenshtein edit distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one string into another.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two rows instead of the full matrix.
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, b_char) in b.chars().enumerate() {
            let cost = usize::from(a_char != b_char);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// Largest distance still worth suggesting for a name of this length.
fn default_threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        n => (n / 2).min(5),
    }
}

/// Find the most similar name from candidates.
///
/// Returns the first candidate with the smallest edit distance, if any is
/// within the threshold. Exact matches are skipped.
fn suggest_similar<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    let threshold = default_threshold(name.len());
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        if name.len().abs_diff(candidate.len()) > threshold || candidate == name {
            continue;
        }

        let distance = edit_distance(name, candidate);
        if distance > threshold {
            continue;
        }
        match best {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(s, _)| s.to_string())
}
