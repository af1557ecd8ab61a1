use crate::syntax::SyntaxList;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;

/// The value held by one named node attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Absent,
    Bool(bool),
    Str(String),
    Node(Box<SyntaxNode>),
    Token(SyntaxToken),
    List(SyntaxList),
}

impl AttributeValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<SyntaxNode> for AttributeValue {
    fn from(node: SyntaxNode) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<Option<SyntaxNode>> for AttributeValue {
    fn from(node: Option<SyntaxNode>) -> Self {
        match node {
            Some(node) => Self::Node(Box::new(node)),
            None => Self::Absent,
        }
    }
}

impl From<SyntaxToken> for AttributeValue {
    fn from(token: SyntaxToken) -> Self {
        Self::Token(token)
    }
}

impl From<Option<SyntaxToken>> for AttributeValue {
    fn from(token: Option<SyntaxToken>) -> Self {
        match token {
            Some(token) => Self::Token(token),
            None => Self::Absent,
        }
    }
}

impl From<SyntaxList> for AttributeValue {
    fn from(list: SyntaxList) -> Self {
        Self::List(list)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
