//! Call stack tracking for the evaluator.
//!
//! Every call and every symbol dereference pushes a [`CallFrame`]; the depth
//! check lives in [`CallStack::push`]. When an error is raised the live
//! frames are snapshotted into an [`EvalBacktrace`].

use calx_ir::Name;

use crate::errors::{recursion_limit, BacktraceFrame, EvalBacktrace, EvalError};

/// A single frame in the live call stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: Name,
    pub is_call: bool,
}

impl CallFrame {
    pub fn call(name: Name) -> Self {
        CallFrame {
            name,
            is_call: true,
        }
    }

    pub fn symbol(name: Name) -> Self {
        CallFrame {
            name,
            is_call: false,
        }
    }
}

/// Live call stack of the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, checking the depth limit.
    ///
    /// The frame is not pushed when the limit is reached.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            let err = EvalError::new(recursion_limit(self.max_depth));
            return Err(err.with_backtrace(self.capture()));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "pop on an empty call stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Snapshot the live frames, innermost first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace::new(
            self.frames
                .iter()
                .rev()
                .map(|frame| BacktraceFrame {
                    name: frame.name.clone(),
                    is_call: frame.is_call,
                })
                .collect(),
        )
    }
}
