use crate::syntax::SyntaxKind;

/// Errors raised while quoting a tree or replaying a call tree.
///
/// All variants are fatal: there is no partial-result mode.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    /// No builder in the registry creates elements of this kind.
    #[error("no builder creates elements of kind `{kind}`")]
    UnsupportedNodeKind { kind: SyntaxKind },

    /// A required parameter of the resolved builder had no quoted value.
    #[error("no value for required parameter `{parameter}` of `{builder}`")]
    MissingArgument { builder: String, parameter: String },

    /// A leftover attribute value has no modifier on its node type.
    #[error("node type `{node_type}` has no modifier `{modifier}`")]
    UnsupportedModifier { node_type: String, modifier: String },

    /// Interchange text could not be decoded.
    #[error("malformed interchange text: {reason}")]
    MalformedInterchangeText { reason: String },

    /// Replay met a call no registered builder or modifier accepts.
    #[error("cannot replay `{call}`: {reason}")]
    UnresolvedCall { call: String, reason: String },

    /// Interchange text could not be written.
    #[error("failed to write interchange text: {0}")]
    Interchange(#[from] serde_json::Error),
}
