use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;
use crate::syntax::SyntaxTrivia;

/// Any element of a tree.
#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
    Trivia(SyntaxTrivia),
}

/// A borrowed [`SyntaxElement`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyntaxElementRef<'a> {
    Node(&'a SyntaxNode),
    Token(&'a SyntaxToken),
    Trivia(&'a SyntaxTrivia),
}

impl SyntaxElement {
    pub fn as_element_ref(&self) -> SyntaxElementRef<'_> {
        match self {
            Self::Node(node) => SyntaxElementRef::Node(node),
            Self::Token(token) => SyntaxElementRef::Token(token),
            Self::Trivia(trivia) => SyntaxElementRef::Trivia(trivia),
        }
    }
}

impl From<SyntaxNode> for SyntaxElement {
    fn from(node: SyntaxNode) -> Self {
        Self::Node(node)
    }
}

impl From<SyntaxToken> for SyntaxElement {
    fn from(token: SyntaxToken) -> Self {
        Self::Token(token)
    }
}

impl From<SyntaxTrivia> for SyntaxElement {
    fn from(trivia: SyntaxTrivia) -> Self {
        Self::Trivia(trivia)
    }
}
