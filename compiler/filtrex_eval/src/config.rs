//! Evaluation limits.

/// Default cap on the compiled size of a `~=` pattern (1 MiB).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Limits applied while evaluating an expression.
///
/// ```text
/// let config = EvalConfig::default().max_depth(256);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest node nesting allowed, or `None` to let the stack grow.
    pub max_depth: Option<usize>,
    /// Compiled size limit handed to `regex::RegexBuilder`.
    pub regex_size_limit: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: None,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}

impl EvalConfig {
    #[must_use]
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    #[must_use]
    pub fn regex_size_limit(mut self, bytes: usize) -> Self {
        self.regex_size_limit = bytes;
        self
    }
}
