use crate::call::Argument;
use crate::call::CallName;
use crate::call::CallTag;
use std::fmt;

/// A single call: a tagged name plus positional arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodCall {
    pub name: CallName,
    pub arguments: Vec<Argument>,
}

impl MethodCall {
    pub fn new(name: CallName, arguments: Vec<Argument>) -> Self {
        Self { name, arguments }
    }

    pub fn builder(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self::new(CallName::new(CallTag::Builder, name), arguments)
    }

    pub fn modifier(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self::new(CallName::new(CallTag::Modifier, name), arguments)
    }

    pub fn array(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self::new(CallName::new(CallTag::Array, name), arguments)
    }
}

impl fmt::Display for MethodCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(")")
    }
}
