//! Rendering trees back to source text.

use crate::syntax::AttributeValue;
use crate::syntax::SyntaxElement;
use crate::syntax::SyntaxElementRef;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;
use crate::syntax::SyntaxTrivia;
use inherent::inherent;

/// Trait implemented by every tree element. Provides lossless text
/// reconstruction.
///
/// All element types implement this trait via `#[inherent] impl Render`, so
/// the methods are callable without importing the trait while generic code
/// can still bound on it.
///
/// A node renders as the concatenation of its node, token and list
/// attributes in attribute order; boolean and string attributes contribute
/// nothing. A token renders as leading trivia, text, trailing trivia.
pub trait Render {
    /// Append this element's full text (trivia included) to `sink`.
    fn append_full_text(&self, sink: &mut String);

    /// Return this element's full text.
    ///
    /// Convenience wrapper around
    /// [`append_full_text`](Render::append_full_text).
    fn to_full_string(&self) -> String {
        let mut s = String::new();
        self.append_full_text(&mut s);
        s
    }
}

#[inherent]
impl Render for SyntaxNode {
    pub fn append_full_text(&self, sink: &mut String) {
        for attr in &self.attributes {
            attr.value.append_full_text(sink);
        }
    }

    pub fn to_full_string(&self) -> String;
}

#[inherent]
impl Render for SyntaxToken {
    pub fn append_full_text(&self, sink: &mut String) {
        for trivia in &self.leading {
            trivia.append_full_text(sink);
        }
        sink.push_str(&self.text);
        for trivia in &self.trailing {
            trivia.append_full_text(sink);
        }
    }

    pub fn to_full_string(&self) -> String;
}

#[inherent]
impl Render for SyntaxTrivia {
    pub fn append_full_text(&self, sink: &mut String) {
        match &self.structure {
            Some(structure) => structure.append_full_text(sink),
            None => sink.push_str(&self.text),
        }
    }

    pub fn to_full_string(&self) -> String;
}

#[inherent]
impl Render for SyntaxList {
    pub fn append_full_text(&self, sink: &mut String) {
        for element in self.with_separators() {
            element.append_full_text(sink);
        }
    }

    pub fn to_full_string(&self) -> String;
}

#[inherent]
impl Render for AttributeValue {
    pub fn append_full_text(&self, sink: &mut String) {
        match self {
            Self::Absent | Self::Bool(_) | Self::Str(_) => (),
            Self::Node(node) => node.append_full_text(sink),
            Self::Token(token) => token.append_full_text(sink),
            Self::List(list) => list.append_full_text(sink),
        }
    }

    pub fn to_full_string(&self) -> String;
}

#[inherent]
impl Render for SyntaxElement {
    pub fn append_full_text(&self, sink: &mut String) {
        self.as_element_ref().append_full_text(sink)
    }

    pub fn to_full_string(&self) -> String;
}

#[inherent]
impl Render for SyntaxElementRef<'_> {
    pub fn append_full_text(&self, sink: &mut String) {
        match self {
            Self::Node(node) => node.append_full_text(sink),
            Self::Token(token) => token.append_full_text(sink),
            Self::Trivia(trivia) => trivia.append_full_text(sink),
        }
    }

    pub fn to_full_string(&self) -> String;
}
