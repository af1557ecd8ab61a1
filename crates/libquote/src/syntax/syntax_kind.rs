use std::fmt;

/// The name of a node, token or trivia kind (e.g. `AddExpression`,
/// `PlusToken`, `WhitespaceTrivia`).
///
/// Kinds are compared by name. What a kind means (which node type it belongs
/// to, its default text, its trivia category) is looked up in a
/// [`KindRegistry`](crate::KindRegistry).
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct SyntaxKind(String);

impl SyntaxKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SyntaxKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SyntaxKind {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for SyntaxKind {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SyntaxKind {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
