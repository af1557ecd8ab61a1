use crate::call::Argument;
use crate::call::CallTag;
use crate::call::MethodCall;
use std::fmt;

/// A builder call followed by the modifier calls applied to its result.
///
/// Replaying `builder_call` and then each of `modifier_calls` in order
/// yields a value whose rendering equals the element it was quoted from.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiCall {
    /// The attribute this call was quoted from, if any. Used to bind the
    /// call to a builder parameter; not part of interchange text.
    pub name: Option<String>,
    pub builder_call: MethodCall,
    pub modifier_calls: Vec<MethodCall>,
}

impl ApiCall {
    pub fn new(builder_call: MethodCall) -> Self {
        Self {
            name: None,
            builder_call,
            modifier_calls: Vec::new(),
        }
    }

    /// A builder call with the given name and arguments.
    pub fn builder(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self::new(MethodCall::builder(name, arguments))
    }

    /// An array literal with the given element type and elements.
    pub fn array(element: impl Into<String>, elements: Vec<Argument>) -> Self {
        Self::new(MethodCall::array(element, elements))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn push_modifier(&mut self, modifier: MethodCall) {
        self.modifier_calls.push(modifier);
    }

    pub fn pop_modifier(&mut self) -> Option<MethodCall> {
        self.modifier_calls.pop()
    }

    /// Whether this is a builder call named `name`.
    pub fn is_builder(&self, name: &str) -> bool {
        self.builder_call.name.tag == CallTag::Builder
            && self.builder_call.name.name == name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.builder_call.arguments
    }
}

impl fmt::Display for ApiCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.builder_call)?;
        for modifier in &self.modifier_calls {
            write!(f, ".{modifier}")?;
        }
        Ok(())
    }
}
