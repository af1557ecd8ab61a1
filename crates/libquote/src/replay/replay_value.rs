use crate::call::Literal;
use crate::render::Render;
use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;
use crate::syntax::SyntaxTrivia;
use inherent::inherent;

/// The result of replaying one call or argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplayValue {
    Node(SyntaxNode),
    Token(SyntaxToken),
    Trivia(SyntaxTrivia),
    List(SyntaxList),
    Array(Vec<ReplayValue>),
    Literal(Literal),
    Kind(SyntaxKind),
}

impl ReplayValue {
    pub(super) fn describe(&self) -> &'static str {
        match self {
            Self::Node(_) => "node",
            Self::Token(_) => "token",
            Self::Trivia(_) => "trivia",
            Self::List(_) => "list",
            Self::Array(_) => "array",
            Self::Literal(Literal::Bool(_)) => "boolean",
            Self::Literal(Literal::Str(_)) => "string",
            Self::Literal(_) => "number",
            Self::Kind(_) => "kind",
        }
    }
}

#[inherent]
impl Render for ReplayValue {
    pub fn append_full_text(&self, sink: &mut String) {
        match self {
            Self::Node(node) => node.append_full_text(sink),
            Self::Token(token) => token.append_full_text(sink),
            Self::Trivia(trivia) => trivia.append_full_text(sink),
            Self::List(list) => list.append_full_text(sink),
            Self::Array(values) => {
                for value in values {
                    value.append_full_text(sink);
                }
            },
            Self::Literal(_) | Self::Kind(_) => (),
        }
    }

    pub fn to_full_string(&self) -> String;
}
