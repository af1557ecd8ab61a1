use crate::syntax::AttributeValue;
use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxToken;

/// One named attribute of a [`SyntaxNode`].
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxAttribute {
    pub name: String,
    pub value: AttributeValue,
}

/// An interior tree node: a kind plus an ordered list of named attributes.
///
/// Attribute order is the rendering order. Nodes are usually created through
/// [`KindRegistry::instantiate`](crate::KindRegistry::instantiate) so every
/// node of a kind carries the same attributes in the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub attributes: Vec<SyntaxAttribute>,
}

impl SyntaxNode {
    pub fn new(kind: impl Into<SyntaxKind>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Vec::new(),
        }
    }

    /// Looks up an attribute by case-insensitive name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
            .map(|attr| &attr.value)
    }

    /// Replaces the value of the attribute named `name` (case-insensitive),
    /// or appends a new attribute when there is none.
    pub fn set_attribute(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) {
        let value = value.into();
        match self
            .attributes
            .iter_mut()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
        {
            Some(attr) => attr.value = value,
            None => self.attributes.push(SyntaxAttribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    pub fn with_attribute(
        mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn node(&self, name: &str) -> Option<&SyntaxNode> {
        match self.attribute(name) {
            Some(AttributeValue::Node(node)) => Some(node),
            _ => None,
        }
    }

    pub fn token(&self, name: &str) -> Option<&SyntaxToken> {
        match self.attribute(name) {
            Some(AttributeValue::Token(token)) => Some(token),
            _ => None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&SyntaxList> {
        match self.attribute(name) {
            Some(AttributeValue::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.attribute(name) {
            Some(AttributeValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.attribute(name) {
            Some(AttributeValue::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}
