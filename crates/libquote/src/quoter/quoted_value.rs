use crate::call::Argument;

/// A quoted attribute value tagged with the attribute it came from.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct QuotedValue {
    pub(super) name: String,
    pub(super) argument: Argument,
}

impl QuotedValue {
    pub(super) fn new(name: &str, argument: Argument) -> Self {
        let argument = match argument {
            Argument::Call(call) => Argument::Call(call.with_name(name)),
            other => other,
        };
        Self {
            name: name.to_string(),
            argument,
        }
    }
}
