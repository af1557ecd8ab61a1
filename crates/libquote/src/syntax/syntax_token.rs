use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxTrivia;
use crate::syntax::TokenValue;
use smallvec::SmallVec;

/// Type alias for trivia storage. Most tokens carry zero to two trivia on
/// each side.
pub type TriviaVec = SmallVec<[SyntaxTrivia; 2]>;

/// A leaf token with its surrounding trivia.
///
/// Leading trivia precedes the token text, trailing trivia follows it. A
/// missing token (`is_missing`) was synthesized by error recovery and has
/// empty text.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxToken {
    pub kind: SyntaxKind,
    pub text: String,
    pub value: Option<TokenValue>,
    pub leading: TriviaVec,
    pub trailing: TriviaVec,
    pub is_missing: bool,
}

impl SyntaxToken {
    /// Convenience constructor for a token with no trivia and no value.
    pub fn new(kind: impl Into<SyntaxKind>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            value: None,
            leading: SmallVec::new(),
            trailing: SmallVec::new(),
            is_missing: false,
        }
    }

    pub fn missing(kind: impl Into<SyntaxKind>) -> Self {
        Self {
            is_missing: true,
            ..Self::new(kind, "")
        }
    }

    pub fn with_value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_leading(
        mut self,
        leading: impl IntoIterator<Item = SyntaxTrivia>,
    ) -> Self {
        self.leading = leading.into_iter().collect();
        self
    }

    pub fn with_trailing(
        mut self,
        trailing: impl IntoIterator<Item = SyntaxTrivia>,
    ) -> Self {
        self.trailing = trailing.into_iter().collect();
        self
    }

    pub fn has_trivia(&self) -> bool {
        !self.leading.is_empty() || !self.trailing.is_empty()
    }
}
