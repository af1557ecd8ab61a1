use crate::syntax::SyntaxKind;

/// A registry declaration that would make quoting or replay ambiguous.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegistryConsistencyError {
    #[error("node type `{node_type}` declares no kinds")]
    NodeTypeWithoutKinds { node_type: String },

    #[error(
        "overloads of builder `{builder}` accept the same argument shapes"
    )]
    AmbiguousOverloads { builder: String },

    #[error(
        "builder `{builder}` takes a leading string but has no overload \
        taking a token in its place"
    )]
    MissingTokenTwin { builder: String },

    #[error(
        "node type `{node_type}` defaults attribute `{attribute}` to \
        undeclared token kind `{kind}`"
    )]
    UnknownTokenKind {
        node_type: String,
        attribute: String,
        kind: SyntaxKind,
    },
}
