use crate::call::ApiCall;
use crate::call::Argument;
use crate::call::CallTag;
use crate::call::MethodCall;
use crate::kind_registry::BuilderSpec;
use crate::kind_registry::NodeType;
use crate::kind_registry::ParamType;
use crate::quoter::quoted_value::QuotedValue;
use crate::quoter::Quoter;
use crate::replay::ReplayValue;
use crate::replay::Replayer;
use crate::QuoteError;

type Result<T> = std::result::Result<T, QuoteError>;

impl Quoter<'_> {
    /// Binds quoted values to the parameters of `builder` and turns the
    /// values left over into modifier calls.
    pub(super) fn assemble(
        &self,
        node_type: &NodeType,
        builder: &BuilderSpec,
        mut values: Vec<QuotedValue>,
    ) -> Result<ApiCall> {
        let mut arguments = Vec::with_capacity(builder.params.len());
        for param in &builder.params {
            if builder.params.len() == 1 && param.variadic {
                let elements = take_value(&mut values, &param.name, |argument| {
                    array_elements(argument).is_some()
                })
                .and_then(|argument| match argument {
                    Argument::Call(call) => into_array_elements(call),
                    _ => None,
                });
                if let Some(elements) = elements {
                    arguments.extend(elements);
                    break;
                }
            }

            let found = if param.ty == ParamType::Str && param.name == "name" {
                take_identifier(&mut values, false)
            } else if param.ty == ParamType::Str && param.name == "identifier" {
                take_identifier(&mut values, true)
                    .or_else(|| take_value(&mut values, &param.name, |_| true))
            } else {
                take_value(&mut values, &param.name, |_| true)
            };

            match found {
                Some(argument) => arguments.push(argument),
                None if param.is_required() => {
                    return Err(QuoteError::MissingArgument {
                        builder: builder.name.clone(),
                        parameter: param.name.clone(),
                    });
                },
                None => (),
            }
        }

        let mut api_call = ApiCall::builder(builder.name.as_str(), arguments);
        let mut modifiers = Vec::with_capacity(values.len());
        for value in values {
            let modifier = proper_case(&value.name);
            let Some(attribute) = node_type.structural_attribute(&value.name)
            else {
                return Err(QuoteError::UnsupportedModifier {
                    node_type: node_type.name.clone(),
                    modifier,
                });
            };
            modifiers.push(MethodCall::modifier(
                proper_case(&attribute.name),
                vec![value.argument],
            ));
        }

        if self.options.remove_redundant_modifying_calls && !modifiers.is_empty()
        {
            self.append_changing_modifiers(&mut api_call, modifiers)?;
        } else {
            api_call.modifier_calls.extend(modifiers);
        }
        Ok(api_call)
    }

    /// Appends each modifier in turn, keeping it only when it changes the
    /// rendering of the call built so far.
    fn append_changing_modifiers(
        &self,
        api_call: &mut ApiCall,
        modifiers: Vec<MethodCall>,
    ) -> Result<()> {
        let mut before = self.evaluate(api_call)?;
        for modifier in modifiers {
            api_call.push_modifier(modifier);
            let after = self.evaluate(api_call)?;
            if after == before {
                if let Some(dropped) = api_call.pop_modifier() {
                    log::trace!(
                        "dropped redundant modifier `{}` on `{}`",
                        dropped.name,
                        api_call.builder_call.name,
                    );
                }
            } else {
                log::trace!(
                    "kept modifier `{}` on `{}`",
                    api_call.modifier_calls.last().map_or(
                        String::new(),
                        |modifier| modifier.name.to_string(),
                    ),
                    api_call.builder_call.name,
                );
                before = after;
            }
        }
        Ok(())
    }

    /// Replays `api_call` and renders the result the way it will look after
    /// a full replay: normalized when default formatting is in effect.
    fn evaluate(&self, api_call: &ApiCall) -> Result<String> {
        let value = Replayer::new(self.registry).replay(api_call)?;
        match (value, self.normalizer) {
            (ReplayValue::Node(node), Some(normalizer))
                if self.options.use_default_formatting =>
            {
                Ok(normalizer.normalize_whitespace(&node).to_full_string())
            },
            (value, _) => Ok(value.to_full_string()),
        }
    }
}

/// Removes and returns the first value named `name` (case-insensitive) that
/// satisfies `accept`.
fn take_value(
    values: &mut Vec<QuotedValue>,
    name: &str,
    accept: impl Fn(&Argument) -> bool,
) -> Option<Argument> {
    let index = values.iter().position(|value| {
        value.name.eq_ignore_ascii_case(name) && accept(&value.argument)
    })?;
    Some(values.remove(index).argument)
}

/// Takes the `Identifier` value for a string-typed name parameter.
///
/// A one-argument `Identifier(text)` call yields its text. Any other value
/// is taken whole, unless `only_simple` is set, in which case it is left in
/// place.
fn take_identifier(
    values: &mut Vec<QuotedValue>,
    only_simple: bool,
) -> Option<Argument> {
    let index = values
        .iter()
        .position(|value| value.name.eq_ignore_ascii_case("Identifier"))?;
    let simple_text = match &values[index].argument {
        Argument::Call(call)
            if call.is_builder("Identifier")
                && call.modifier_calls.is_empty() =>
        {
            match call.arguments() {
                [argument @ Argument::Literal(_)] => Some(argument.clone()),
                _ => None,
            }
        },
        _ => None,
    };
    match simple_text {
        Some(text) => {
            values.remove(index);
            Some(text)
        },
        None if only_simple => None,
        None => Some(values.remove(index).argument),
    }
}

/// The elements of a plural list call built from an array literal.
fn array_elements(argument: &Argument) -> Option<&[Argument]> {
    let call = argument.as_call()?;
    if !call.modifier_calls.is_empty() {
        return None;
    }
    match call.arguments() {
        [Argument::Call(array)]
            if array.builder_call.name.tag == CallTag::Array =>
        {
            Some(array.arguments())
        },
        _ => None,
    }
}

fn into_array_elements(call: ApiCall) -> Option<Vec<Argument>> {
    let mut arguments = call.builder_call.arguments.into_iter();
    match (arguments.next(), arguments.next()) {
        (Some(Argument::Call(array)), None)
            if array.builder_call.name.tag == CallTag::Array =>
        {
            Some(array.builder_call.arguments)
        },
        _ => None,
    }
}

/// Upper-cases the first character: `operatorToken` becomes
/// `OperatorToken`.
fn proper_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
