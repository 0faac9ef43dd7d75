use crate::line;

/// Configuration for a [`StreamingParser`](crate::StreamingParser).
///
/// # Examples
///
/// ```rust
/// use textmodem::{ParserOptions, StreamingParser, line};
///
/// let options = ParserOptions {
///     line_terminator: line::is_line_terminator_or_line_feed,
///     expected_len: Some(1024),
///     ..Default::default()
/// };
/// let parser = StreamingParser::with_options(options);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParserOptions {
    /// Decides which code points start a new line.
    ///
    /// # Default
    ///
    /// [`line::is_line_terminator`]: carriage return and form feed, but not
    /// line feed.
    pub line_terminator: fn(char) -> bool,

    /// Number of code points the caller expects in total, forwarded to the
    /// progress delegate as `expected_total`.
    ///
    /// # Default
    ///
    /// `None`, reported as `0`.
    pub expected_len: Option<u64>,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic when finalize fails instead of returning the error.
    ///
    /// Only available in test and fuzzing builds, to get a backtrace at the
    /// point of failure.
    pub panic_on_error: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            line_terminator: line::is_line_terminator,
            expected_len: None,
            #[cfg(any(test, feature = "fuzzing"))]
            panic_on_error: false,
        }
    }
}
