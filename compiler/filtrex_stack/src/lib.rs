//! Stack growth for deeply nested expressions.
//!
//! Both the parser and the evaluator recurse once per nesting level. Wrapping
//! each recursive step in [`ensure_sufficient_stack`] lets pathological input
//! such as `((((...))))` or `not not not ... x` run without overflowing the
//! thread's stack.
//!
//! - **Red zone**: 100KB. Below this much headroom the stack is grown.
//! - **Growth size**: 1MB per extension.
//!
//! On `wasm32` the guard is a passthrough.

const RED_ZONE: usize = 100 * 1024;

const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
