/// Categorizes parse errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise. Full human-readable messages
/// live in [`ScriptParseError::message`](crate::ScriptParseError::message).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ScriptParseErrorKind {
    /// Expected a specific token but found something else.
    ///
    /// ```text
    /// let x 1;
    ///       ^ expected `=`, found `1`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The input ended before a construct was complete.
    #[error("unexpected end of input")]
    UnexpectedEof { expected: Vec<String> },

    /// A character that starts no token.
    #[error("unexpected character `{character}`")]
    BadCharacter { character: char },

    /// A numeric literal whose value does not fit its type.
    #[error("invalid number `{text}`")]
    InvalidNumber { text: String },

    /// A string literal (plain or interpolated) without its closing quote
    /// before the end of the line.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A `/*` comment without its closing `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,

    /// A token that cannot start a statement was skipped.
    #[error("skipped token `{text}`")]
    SkippedToken { text: String },

    /// Nesting went deeper than the parser allows.
    #[error("maximum nesting depth exceeded")]
    MaximumDepthExceeded,
}
