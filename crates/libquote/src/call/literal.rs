use crate::syntax::TokenValue;
use std::fmt;

/// A literal argument value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&TokenValue> for Literal {
    fn from(value: &TokenValue) -> Self {
        match value {
            TokenValue::Int(value) => Self::Int(*value),
            TokenValue::Float(value) => Self::Float(*value),
            TokenValue::Str(value) => Self::Str(value.clone()),
        }
    }
}

impl Literal {
    /// The token value this literal denotes, if any.
    pub fn to_token_value(&self) -> Option<TokenValue> {
        match self {
            Self::Bool(_) => None,
            Self::Int(value) => Some(TokenValue::Int(*value)),
            Self::Float(value) => Some(TokenValue::Float(*value)),
            Self::Str(value) => Some(TokenValue::Str(value.clone())),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Str(value) => write!(f, "{value:?}"),
        }
    }
}
