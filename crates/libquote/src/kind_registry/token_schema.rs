use crate::syntax::SyntaxKind;

/// How tokens of a kind are built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenCategory {
    /// `Identifier(text)`.
    Identifier,

    /// `Literal(value)`; the token kind follows from the value type.
    Literal,

    /// Text-bearing tokens with free-form raw text and a resolved text value,
    /// built as `<builder>(leading, [kind,] raw, value, trailing)`.
    Text {
        builder: String,
        with_kind: bool,
    },

    /// `BadToken(leading, text, trailing)`.
    Bad,

    /// Keywords and punctuation with fixed text: `Token(kind)`.
    Fixed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenSchema {
    pub kind: SyntaxKind,
    pub category: TokenCategory,

    /// The text `Token(kind)` produces.
    pub default_text: String,
}
