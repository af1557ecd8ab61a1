use crate::ByteSpan;
use crate::ScriptParseErrorKind;

/// A parse error with its location.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ScriptParseError {
    /// Human-readable primary message, e.g. "expected `;`, found `}`".
    message: String,

    /// Where the error was detected. Zero-length for missing tokens.
    span: ByteSpan,

    kind: ScriptParseErrorKind,
}

impl ScriptParseError {
    pub fn new(
        message: impl Into<String>,
        span: ByteSpan,
        kind: ScriptParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn kind(&self) -> &ScriptParseErrorKind {
        &self.kind
    }

    /// Formats this error as a single-line summary:
    ///
    /// ```text
    /// 12..13: error: expected `;`, found `}`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.span, self.message)
    }

    /// Formats this error as a diagnostic with a source snippet:
    ///
    /// ```text
    /// error: expected `;`, found `}`
    ///   --> <input>:3:9
    ///    |
    ///  3 |     x = 1
    ///    |          ^
    /// ```
    ///
    /// Without `source` the location falls back to the byte span.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = format!("error: {}\n", self.message);
        let Some(source) = source else {
            output.push_str(&format!("  --> <input>@{}\n", self.span));
            return output;
        };

        let position = self.span.start_position(source);
        let line = position.line() + 1;
        let column = position.col_utf8() + 1;
        output.push_str(&format!("  --> <input>:{line}:{column}\n"));

        let Some(line_content) = source.lines().nth(position.line()) else {
            return output;
        };
        let width = line.to_string().len().max(2);
        let underline_len = source
            .get(self.span.start as usize..self.span.end as usize)
            .map_or(1, |text| text.chars().count().max(1));
        output.push_str(&format!("{:>width$} |\n", ""));
        output.push_str(&format!("{line:>width$} | {line_content}\n"));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            padding = position.col_utf8(),
        ));
        output
    }
}
