//! Lexes script source text into tokens that own their trivia.
//!
//! Every byte of the input ends up in exactly one token or trivia, so the
//! tokens render back to the source text unchanged:
//!
//! - **Trailing trivia** of a token runs to the end of its line, line break
//!   included.
//! - **Leading trivia** is everything else before a token: whitespace,
//!   comments, blank lines and `#region`/`#endregion` directives (as
//!   structured trivia).
//! - **Errors** never stop lexing. Unknown characters become `BadToken`s;
//!   unterminated strings and comments run to the end of the line or input.
//!
//! Interpolated strings (`$"a {b} c"`) switch the lexer into string mode,
//! where text runs become `InterpolatedStringTextToken`s and `{` opens an
//! interpolation lexed as ordinary code until its matching `}`.

use crate::script_registry::script_registry;
use crate::script_tokens::DIRECTIVE_KEYWORDS;
use crate::script_tokens::KEYWORDS;
use crate::script_tokens::PUNCTUATION;
use crate::ByteSpan;
use crate::ScriptParseError;
use crate::ScriptParseErrorKind;
use libquote::syntax::SyntaxKind;
use libquote::syntax::SyntaxNode;
use libquote::syntax::SyntaxToken;
use libquote::syntax::SyntaxTrivia;
use libquote::syntax::TokenValue;
use libquote::syntax::TriviaVec;

/// A token together with the span of its text (trivia excluded).
#[derive(Clone, Debug, PartialEq)]
pub struct LexedToken {
    pub token: SyntaxToken,
    pub span: ByteSpan,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TriviaMode {
    Leading,
    Trailing,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LexMode {
    /// Code inside an interpolation, with the number of unmatched `{` seen
    /// since it opened.
    Interpolation { brace_depth: usize },

    /// Text of an interpolated string.
    InterpolatedString,
}

/// An iterator over the [`LexedToken`]s of a script.
///
/// The last token produced is always an `EndOfFileToken`, which holds the
/// trivia at the end of the input.
pub struct ScriptLexer<'src> {
    source: &'src str,

    /// Current byte offset; the text left to lex is `&source[offset..]`.
    offset: usize,

    /// Nested interpolated-string modes. Empty at top level.
    modes: Vec<LexMode>,

    errors: Vec<ScriptParseError>,

    /// Whether the `EndOfFileToken` has been produced.
    finished: bool,
}

impl<'src> ScriptLexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            modes: Vec::new(),
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Errors found so far.
    pub fn errors(&self) -> &[ScriptParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ScriptParseError> {
        self.errors
    }

    // =========================================================================
    // Scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes `len` bytes and returns them.
    fn bump(&mut self, len: usize) -> &'src str {
        let text = &self.source[self.offset..self.offset + len];
        self.offset += len;
        text
    }

    fn bump_while(&mut self, predicate: impl Fn(char) -> bool) -> &'src str {
        let len = self
            .remaining()
            .char_indices()
            .find(|(_, ch)| !predicate(*ch))
            .map_or(self.remaining().len(), |(index, _)| index);
        self.bump(len)
    }

    /// Byte length of the text before the next line break (or the end).
    fn line_remainder_len(&self) -> usize {
        let rest = self.remaining().as_bytes();
        memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len())
    }

    /// Whether only spaces and tabs precede the current offset on its line.
    fn at_line_start(&self) -> bool {
        self.source.as_bytes()[..self.offset]
            .iter()
            .rev()
            .take_while(|byte| **byte != b'\n' && **byte != b'\r')
            .all(|byte| *byte == b' ' || *byte == b'\t')
    }

    fn record_error(
        &mut self,
        message: impl Into<String>,
        start: usize,
        kind: ScriptParseErrorKind,
    ) {
        self.errors.push(ScriptParseError::new(
            message,
            ByteSpan::from_offsets(start, self.offset),
            kind,
        ));
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> Option<LexedToken> {
        if self.finished {
            return None;
        }
        if self.modes.last() == Some(&LexMode::InterpolatedString) {
            return self.lex_string_content();
        }

        let leading = self.lex_trivia(TriviaMode::Leading);
        let start = self.offset;
        if self.remaining().is_empty() {
            self.finished = true;
            return Some(LexedToken {
                token: SyntaxToken::new("EndOfFileToken", "").with_leading(leading),
                span: ByteSpan::from_offsets(start, start),
            });
        }

        let (kind, value) = self.lex_code_token();
        Some(self.finish_token(kind, value, start, leading))
    }

    /// Wraps up the token that spans `start..offset`, lexing its trailing
    /// trivia unless the token leads back into string text.
    fn finish_token(
        &mut self,
        kind: &str,
        value: Option<TokenValue>,
        start: usize,
        leading: TriviaVec,
    ) -> LexedToken {
        let end = self.offset;
        let trailing = if self.modes.last() == Some(&LexMode::InterpolatedString) {
            TriviaVec::new()
        } else {
            self.lex_trivia(TriviaMode::Trailing)
        };
        let mut token = SyntaxToken::new(kind, &self.source[start..end])
            .with_leading(leading)
            .with_trailing(trailing);
        token.value = value;
        LexedToken {
            token,
            span: ByteSpan::from_offsets(start, end),
        }
    }

    fn lex_code_token(&mut self) -> (&'static str, Option<TokenValue>) {
        let start = self.offset;
        let Some(ch) = self.peek_char() else {
            return ("EndOfFileToken", None);
        };

        if is_identifier_start(ch) {
            let text = self.bump_while(is_identifier_continue);
            let kind = KEYWORDS
                .iter()
                .find(|(keyword, _)| *keyword == text)
                .map_or("IdentifierToken", |(_, kind)| *kind);
            return (kind, None);
        }
        if ch.is_ascii_digit() {
            return self.lex_number();
        }
        if ch == '"' {
            return self.lex_string_literal();
        }

        let punctuation = PUNCTUATION
            .iter()
            .find(|(text, _)| self.remaining().starts_with(*text));
        if let Some((text, kind)) = punctuation {
            self.bump(text.len());
            self.track_braces(kind);
            return (*kind, None);
        }

        self.bump(ch.len_utf8());
        self.record_error(
            format!("unexpected character `{}`", ch.escape_debug()),
            start,
            ScriptParseErrorKind::BadCharacter { character: ch },
        );
        ("BadToken", None)
    }

    /// Keeps the mode stack in step with `$"`, `{` and `}`.
    fn track_braces(&mut self, kind: &str) {
        match (kind, self.modes.last_mut()) {
            ("InterpolatedStringStartToken", _) => {
                self.modes.push(LexMode::InterpolatedString);
            },
            ("OpenBraceToken", Some(LexMode::Interpolation { brace_depth })) => {
                *brace_depth += 1;
            },
            ("CloseBraceToken", Some(LexMode::Interpolation { brace_depth })) => {
                if *brace_depth == 0 {
                    self.modes.pop();
                } else {
                    *brace_depth -= 1;
                }
            },
            _ => (),
        }
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    fn lex_trivia(&mut self, mode: TriviaMode) -> TriviaVec {
        let mut trivia = TriviaVec::new();
        loop {
            let rest = self.remaining();
            let Some(ch) = rest.chars().next() else {
                break;
            };
            match ch {
                ' ' | '\t' => {
                    let text = self.bump_while(|ch| ch == ' ' || ch == '\t');
                    trivia.push(SyntaxTrivia::new("WhitespaceTrivia", text));
                },
                '\r' | '\n' => {
                    let len = if rest.starts_with("\r\n") { 2 } else { 1 };
                    let text = self.bump(len);
                    trivia.push(SyntaxTrivia::new("EndOfLineTrivia", text));
                    if mode == TriviaMode::Trailing {
                        break;
                    }
                },
                '/' if rest.starts_with("///") && !rest.starts_with("////") => {
                    let text = self.bump(self.line_remainder_len());
                    trivia.push(SyntaxTrivia::new("DocumentationCommentTrivia", text));
                },
                '/' if rest.starts_with("//") => {
                    let text = self.bump(self.line_remainder_len());
                    trivia.push(SyntaxTrivia::new("SingleLineCommentTrivia", text));
                },
                '/' if rest.starts_with("/*") => {
                    trivia.push(self.lex_multi_line_comment());
                },
                '#' if mode == TriviaMode::Leading && self.at_line_start() => {
                    match self.lex_directive() {
                        Some(directive) => trivia.push(directive),
                        None => break,
                    }
                },
                _ => break,
            }
        }
        trivia
    }

    fn lex_multi_line_comment(&mut self) -> SyntaxTrivia {
        let start = self.offset;
        let rest = self.remaining().as_bytes();
        let len = match memchr::memmem::find(&rest[2..], b"*/") {
            Some(index) => index + 4,
            None => rest.len(),
        };
        let text = self.bump(len);
        if text.len() < 4 || !text.ends_with("*/") {
            self.record_error(
                "unterminated `/*` comment",
                start,
                ScriptParseErrorKind::UnterminatedComment,
            );
        }
        SyntaxTrivia::new("MultiLineCommentTrivia", text)
    }

    /// Lexes `#region text` or `#endregion text`, line break included, into
    /// a directive node held as structured trivia. Returns `None`, consuming
    /// nothing, when the `#` starts no known directive.
    fn lex_directive(&mut self) -> Option<SyntaxTrivia> {
        let after_hash = &self.remaining()[1..];
        let word_len = after_hash
            .char_indices()
            .find(|(_, ch)| !is_identifier_continue(*ch))
            .map_or(after_hash.len(), |(index, _)| index);
        let word = &after_hash[..word_len];
        let (_, keyword_kind, directive_kind) = DIRECTIVE_KEYWORDS
            .iter()
            .find(|(keyword, _, _)| *keyword == word)?;

        let start = self.offset;
        let hash = SyntaxToken::new("HashToken", self.bump(1));
        let keyword_text = self.bump(word_len);
        let spacing = self.bump_while(|ch| ch == ' ' || ch == '\t');
        let mut keyword = SyntaxToken::new(*keyword_kind, keyword_text);
        if !spacing.is_empty() {
            keyword.trailing.push(SyntaxTrivia::new("WhitespaceTrivia", spacing));
        }

        let mut end_of_directive = SyntaxToken::new("EndOfDirectiveToken", "");
        let message = self.bump(self.line_remainder_len());
        if !message.is_empty() {
            end_of_directive
                .leading
                .push(SyntaxTrivia::new("PreprocessingMessageTrivia", message));
        }
        let line_break_len = if self.remaining().starts_with("\r\n") {
            2
        } else {
            usize::from(!self.remaining().is_empty())
        };
        if line_break_len > 0 {
            let line_break = self.bump(line_break_len);
            end_of_directive
                .trailing
                .push(SyntaxTrivia::new("EndOfLineTrivia", line_break));
        }

        let kind = SyntaxKind::from(*directive_kind);
        let mut directive = script_registry()
            .instantiate(&kind)
            .unwrap_or_else(|| SyntaxNode::new(kind));
        directive.set_attribute("HashToken", hash);
        directive.set_attribute(keyword_kind, keyword);
        directive.set_attribute("EndOfDirectiveToken", end_of_directive);
        directive.set_attribute("IsActive", true);
        directive.set_attribute(
            "Span",
            ByteSpan::from_offsets(start, self.offset).to_string(),
        );
        Some(SyntaxTrivia::structured(directive))
    }

    // =========================================================================
    // Literals
    // =========================================================================

    /// Lexes a decimal or `0x` hexadecimal integer, or a float with a
    /// fraction and/or exponent. Values that do not fit leave the token
    /// without a value.
    fn lex_number(&mut self) -> (&'static str, Option<TokenValue>) {
        let start = self.offset;
        let is_hex = matches!(self.peek_char_nth(1), Some('x' | 'X'))
            && self.peek_char() == Some('0')
            && self.peek_char_nth(2).is_some_and(|ch| ch.is_ascii_hexdigit());
        if is_hex {
            self.bump(2);
            let digits = self.bump_while(|ch| ch.is_ascii_hexdigit());
            let value = i64::from_str_radix(digits, 16).ok().map(TokenValue::Int);
            return self.number_value(start, value);
        }

        self.bump_while(|ch| ch.is_ascii_digit());
        let mut is_float = false;
        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            is_float = true;
            self.bump(1);
            self.bump_while(|ch| ch.is_ascii_digit());
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            let sign_len = usize::from(matches!(self.peek_char_nth(1), Some('+' | '-')));
            if self
                .peek_char_nth(1 + sign_len)
                .is_some_and(|ch| ch.is_ascii_digit())
            {
                is_float = true;
                self.bump(1 + sign_len);
                self.bump_while(|ch| ch.is_ascii_digit());
            }
        }

        let text = &self.source[start..self.offset];
        let value = if is_float {
            text.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(TokenValue::Float)
        } else {
            text.parse::<i64>().ok().map(TokenValue::Int)
        };
        self.number_value(start, value)
    }

    fn number_value(
        &mut self,
        start: usize,
        value: Option<TokenValue>,
    ) -> (&'static str, Option<TokenValue>) {
        if value.is_none() {
            let text = self.source[start..self.offset].to_string();
            self.record_error(
                format!("number `{text}` is out of range"),
                start,
                ScriptParseErrorKind::InvalidNumber { text },
            );
        }
        ("NumericLiteralToken", value)
    }

    /// Lexes a `"..."` string. An unterminated string stops before the line
    /// break.
    fn lex_string_literal(&mut self) -> (&'static str, Option<TokenValue>) {
        let start = self.offset;
        self.bump(1);
        let mut value = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.bump(1);
                    break;
                },
                Some('\\') => {
                    self.bump(1);
                    match self.peek_char() {
                        Some(ch) if ch != '\n' && ch != '\r' => {
                            self.bump(ch.len_utf8());
                            value.push(unescape(ch));
                        },
                        _ => value.push('\\'),
                    }
                },
                Some(ch) if ch != '\n' && ch != '\r' => {
                    self.bump(ch.len_utf8());
                    value.push(ch);
                },
                _ => {
                    self.record_error(
                        "unterminated string literal",
                        start,
                        ScriptParseErrorKind::UnterminatedString,
                    );
                    break;
                },
            }
        }
        ("StringLiteralToken", Some(TokenValue::Str(value)))
    }

    /// Lexes the next piece of interpolated string text: a text run, the
    /// closing quote, or the `{` that opens an interpolation.
    fn lex_string_content(&mut self) -> Option<LexedToken> {
        let start = self.offset;
        match self.peek_char() {
            Some('"') => {
                self.bump(1);
                self.modes.pop();
                Some(self.finish_token(
                    "InterpolatedStringEndToken",
                    None,
                    start,
                    TriviaVec::new(),
                ))
            },
            Some('{') if self.peek_char_nth(1) != Some('{') => {
                self.bump(1);
                self.modes.push(LexMode::Interpolation { brace_depth: 0 });
                Some(self.finish_token("OpenBraceToken", None, start, TriviaVec::new()))
            },
            None | Some('\n' | '\r') => {
                // The string ends without its quote; the parser reports the
                // missing token.
                self.modes.pop();
                self.next_token()
            },
            Some(_) => {
                let mut value = String::new();
                while let Some(ch) = self.peek_char() {
                    match ch {
                        '"' | '\n' | '\r' => break,
                        '{' | '}' if self.peek_char_nth(1) == Some(ch) => {
                            self.bump(2);
                            value.push(ch);
                        },
                        '{' => break,
                        '\\' => {
                            self.bump(1);
                            match self.peek_char() {
                                Some(next) if next != '\n' && next != '\r' => {
                                    self.bump(next.len_utf8());
                                    value.push(unescape(next));
                                },
                                _ => value.push('\\'),
                            }
                        },
                        _ => {
                            self.bump(ch.len_utf8());
                            value.push(ch);
                        },
                    }
                }
                Some(self.finish_token(
                    "InterpolatedStringTextToken",
                    Some(TokenValue::Str(value)),
                    start,
                    TriviaVec::new(),
                ))
            },
        }
    }
}

impl Iterator for ScriptLexer<'_> {
    type Item = LexedToken;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '0' => '\0',
        other => other,
    }
}
