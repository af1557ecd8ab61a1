use crate::call::ApiCall;
use crate::call::CallTag;
use crate::call::Literal;
use crate::syntax::SyntaxKind;
use std::fmt;

/// One argument of a [`MethodCall`](crate::MethodCall).
#[derive(Clone, Debug, PartialEq)]
pub enum Argument {
    Literal(Literal),
    Kind(SyntaxKind),
    Call(ApiCall),
}

impl Argument {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Literal(Literal::Str(value.into()))
    }

    pub fn as_call(&self) -> Option<&ApiCall> {
        match self {
            Self::Call(call) => Some(call),
            _ => None,
        }
    }
}

impl From<ApiCall> for Argument {
    fn from(call: ApiCall) -> Self {
        Self::Call(call)
    }
}

impl From<Literal> for Argument {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Kind(kind) => write!(f, "{}{kind}", CallTag::Kind.prefix()),
            Self::Call(call) => write!(f, "{call}"),
        }
    }
}
