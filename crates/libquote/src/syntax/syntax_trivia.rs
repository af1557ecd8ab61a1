use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxNode;

/// A piece of trivia attached to a token: whitespace, a line break, a
/// comment, or a structured directive.
///
/// Structured trivia keeps the directive's tree in `structure`; its `text` is
/// always the rendering of that tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxTrivia {
    pub kind: SyntaxKind,
    pub text: String,
    pub structure: Option<Box<SyntaxNode>>,
}

impl SyntaxTrivia {
    pub fn new(kind: impl Into<SyntaxKind>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            structure: None,
        }
    }

    /// Builds a structured trivia whose kind is the structure's kind and whose
    /// text is the structure's rendering.
    pub fn structured(node: SyntaxNode) -> Self {
        Self {
            kind: node.kind.clone(),
            text: node.to_full_string(),
            structure: Some(Box::new(node)),
        }
    }

    pub fn is_structured(&self) -> bool {
        self.structure.is_some()
    }
}

