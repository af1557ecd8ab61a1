use crate::syntax::ListShape;
use crate::syntax::SyntaxKind;

/// The declared value type of a node attribute.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeType {
    Bool,
    Str,
    Token,
    Node,

    /// A list attribute. `element` names the element type used in list
    /// builder names (`List<Statement>`, `a:Statement`).
    List {
        shape: ListShape,
        element: String,
    },
}

/// Declares one attribute of a node type.
///
/// Only structural attributes are quoted. Cosmetic attributes (spans,
/// diagnostics flags, derived values) are carried on nodes but never
/// contribute to a call tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeSchema {
    pub name: String,
    pub ty: AttributeType,
    pub structural: bool,

    /// Token kind a freshly instantiated node holds in this attribute, for
    /// kinds that do not override it.
    pub default_token: Option<SyntaxKind>,
}

impl AttributeSchema {
    fn structural(name: &str, ty: AttributeType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            structural: true,
            default_token: None,
        }
    }

    pub fn bool(name: &str) -> Self {
        Self::structural(name, AttributeType::Bool)
    }

    pub fn string(name: &str) -> Self {
        Self::structural(name, AttributeType::Str)
    }

    pub fn node(name: &str) -> Self {
        Self::structural(name, AttributeType::Node)
    }

    pub fn token(name: &str) -> Self {
        Self::structural(name, AttributeType::Token)
    }

    pub fn token_with_default(
        name: &str,
        default_token: impl Into<SyntaxKind>,
    ) -> Self {
        Self {
            default_token: Some(default_token.into()),
            ..Self::token(name)
        }
    }

    pub fn list(name: &str, shape: ListShape, element: &str) -> Self {
        Self::structural(name, AttributeType::List {
            shape,
            element: element.to_string(),
        })
    }

    pub fn token_list(name: &str) -> Self {
        Self::list(name, ListShape::Tokens, "Token")
    }

    /// Marks this attribute cosmetic.
    pub fn cosmetic(mut self) -> Self {
        self.structural = false;
        self
    }
}
