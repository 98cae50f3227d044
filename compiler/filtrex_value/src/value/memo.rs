//! One-shot memo cell behind [`Value::Memoized`](super::Value::Memoized).

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::Value;
use crate::errors::EvalResult;

type Thunk = Box<dyn Fn() -> EvalResult + Send>;

enum MemoState {
    Pending(Thunk),
    Resolved(Value),
}

/// Shared, lock-guarded memo cell.
///
/// Clones share the same state. The lock is held while the closure runs, so
/// concurrent resolvers wait for the first and then read its result; the
/// closure runs at most once successfully. If it fails, the cell stays
/// pending and the next resolution tries again.
///
/// A closure that resolves its own cell deadlocks.
#[derive(Clone)]
pub struct MemoCell {
    state: Arc<Mutex<MemoState>>,
}

impl MemoCell {
    pub fn new(f: impl Fn() -> EvalResult + Send + 'static) -> Self {
        MemoCell {
            state: Arc::new(Mutex::new(MemoState::Pending(Box::new(f)))),
        }
    }

    /// Return the cached value, running the closure first if needed.
    pub fn resolve(&self) -> EvalResult {
        let mut state = self.state.lock();
        let value = match &*state {
            MemoState::Resolved(value) => return Ok(value.clone()),
            MemoState::Pending(thunk) => {
                tracing::trace!("resolving memoized value");
                thunk()?.resolve()?
            }
        };
        // Replacing the state drops the closure.
        *state = MemoState::Resolved(value.clone());
        Ok(value)
    }

    /// The cached value, if the closure has already run.
    ///
    /// Never blocks: a cell that is being resolved reports `None`.
    pub fn peek(&self) -> Option<Value> {
        match self.state.try_lock().as_deref() {
            Some(MemoState::Resolved(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(&*self.state.lock(), MemoState::Resolved(_))
    }

    /// Whether both handles share one cell.
    pub fn ptr_eq(&self, other: &MemoCell) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for MemoCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state.try_lock().as_deref() {
            Some(MemoState::Resolved(value)) => f.debug_tuple("Resolved").field(value).finish(),
            Some(MemoState::Pending(_)) => f.write_str("Pending"),
            None => f.write_str("Resolving"),
        }
    }
}
