//! Compiler configuration.

/// Default limit on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default limit on input size in bytes (1 MiB).
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// Default name of the helper that `empty x` calls.
pub const DEFAULT_EMPTY_HELPER: &str = "isEmpty";

/// Options shared by every call of a [`Compiler`](crate::Compiler).
///
/// # Examples
///
/// ```
/// use el_compiler::CompilerOptions;
///
/// let options = CompilerOptions::default()
///     .with_max_depth(32)
///     .with_empty_helper("Helpers.isEmpty");
/// assert_eq!(options.max_depth, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Deepest expression nesting the parser accepts
    pub max_depth: usize,
    /// Largest input, in bytes, the compiler accepts
    pub max_input_len: usize,
    /// Callee emitted for the `empty` operator
    pub empty_helper: String,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        CompilerOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            empty_helper: DEFAULT_EMPTY_HELPER.to_string(),
        }
    }
}

impl CompilerOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn with_empty_helper(mut self, helper: impl Into<String>) -> Self {
        self.empty_helper = helper.into();
        self
    }
}
