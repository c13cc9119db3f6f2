//! Stack growth for deeply nested Egg programs.
//!
//! Both the parser and the evaluator are plain structural recursions: a
//! source with ten thousand nested applications, or an Egg function that
//! recurses a hundred thousand times, recurses the same amount on the host.
//! Each recursive step goes through [`ensure_sufficient_stack`], which grows
//! the stack on a fresh segment when the remaining space gets low.
//!
//! Recursion that never terminates still fails eventually; it just runs out
//! of memory instead of hitting the fixed thread stack limit.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: passthrough.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&self, expr: &Expression, env: &Environment) -> EvalResult {
///     ensure_sufficient_stack(|| match expr {
///         // ... recursive evaluation ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
