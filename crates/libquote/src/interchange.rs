//! The JSON interchange format for call trees.
//!
//! Each [`ApiCall`] is one object with a single property named by the
//! builder call's tagged name (`f:Block`, `a:Statement`) whose value is
//! `null` for a call without arguments or an array of arguments. Modifier
//! calls go in a sibling `b` array, each as `{ "w:Name": [args] }`.
//!
//! Arguments are raw JSON literals, kind tags (`"k:AddExpression"`) or
//! nested call objects. A string literal that starts with `k:` or `\` is
//! written with one extra leading `\`, which decoding strips again, so
//! literal strings never read back as kind tags.
//!
//! ```text
//! {"f:BinaryExpression":["k:AddExpression",{"f:IdentifierName":["a"]},
//!   {"f:LiteralExpression":["k:NumericLiteralExpression",{"f:Literal":[1]}]}]}
//! ```

use crate::call::ApiCall;
use crate::call::Argument;
use crate::call::CallName;
use crate::call::CallTag;
use crate::call::Literal;
use crate::call::MethodCall;
use crate::syntax::SyntaxKind;
use crate::QuoteError;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

type Result<T> = std::result::Result<T, QuoteError>;

/// Property holding the modifier calls of an [`ApiCall`] object.
const MODIFIERS_KEY: &str = "b";

/// Writes `api_call` as interchange text, indented when `pretty` is set.
pub fn encode(api_call: &ApiCall, pretty: bool) -> Result<String> {
    let wire = WireCall(api_call);
    let text = if pretty {
        serde_json::to_string_pretty(&wire)?
    } else {
        serde_json::to_string(&wire)?
    };
    Ok(text)
}

/// Reads interchange text back into an [`ApiCall`].
pub fn decode(text: &str) -> Result<ApiCall> {
    let value: Value = serde_json::from_str(text)
        .map_err(|err| malformed(format!("invalid JSON: {err}")))?;
    decode_call(&value)
}

fn malformed(reason: impl Into<String>) -> QuoteError {
    QuoteError::MalformedInterchangeText {
        reason: reason.into(),
    }
}

struct WireCall<'a>(&'a ApiCall);

impl Serialize for WireCall<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let call = self.0;
        let len = if call.modifier_calls.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(
            &call.builder_call.name.to_string(),
            &WireArguments(&call.builder_call.arguments),
        )?;
        if !call.modifier_calls.is_empty() {
            map.serialize_entry(MODIFIERS_KEY, &WireModifiers(&call.modifier_calls))?;
        }
        map.end()
    }
}

struct WireModifiers<'a>(&'a [MethodCall]);

impl Serialize for WireModifiers<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for modifier in self.0 {
            seq.serialize_element(&WireModifier(modifier))?;
        }
        seq.end()
    }
}

struct WireModifier<'a>(&'a MethodCall);

impl Serialize for WireModifier<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.0.name.to_string(), &WireArguments(&self.0.arguments))?;
        map.end()
    }
}

/// `null` when empty, an array otherwise.
struct WireArguments<'a>(&'a [Argument]);

impl Serialize for WireArguments<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            return serializer.serialize_none();
        }
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for argument in self.0 {
            seq.serialize_element(&WireArgument(argument))?;
        }
        seq.end()
    }
}

struct WireArgument<'a>(&'a Argument);

impl Serialize for WireArgument<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Argument::Literal(Literal::Bool(value)) => serializer.serialize_bool(*value),
            Argument::Literal(Literal::Int(value)) => serializer.serialize_i64(*value),
            Argument::Literal(Literal::Float(value)) => serializer.serialize_f64(*value),
            Argument::Literal(Literal::Str(value)) => {
                serializer.serialize_str(&escape_string(value))
            },
            Argument::Kind(kind) => {
                serializer.serialize_str(&format!("{}{kind}", CallTag::Kind.prefix()))
            },
            Argument::Call(call) => WireCall(call).serialize(serializer),
        }
    }
}

fn escape_string(value: &str) -> std::borrow::Cow<'_, str> {
    if value.starts_with(CallTag::Kind.prefix()) || value.starts_with('\\') {
        std::borrow::Cow::Owned(format!("\\{value}"))
    } else {
        std::borrow::Cow::Borrowed(value)
    }
}

fn decode_call(value: &Value) -> Result<ApiCall> {
    let Value::Object(properties) = value else {
        return Err(malformed(format!("expected a call object, found `{value}`")));
    };
    let mut builder_call = None;
    let mut modifier_calls = Vec::new();
    for (key, value) in properties {
        if key == MODIFIERS_KEY {
            let Value::Array(modifiers) = value else {
                return Err(malformed("modifier calls must be an array"));
            };
            for modifier in modifiers {
                modifier_calls.push(decode_modifier(modifier)?);
            }
            continue;
        }
        if builder_call.is_some() {
            return Err(malformed(format!(
                "call object has more than one call name (`{key}`)",
            )));
        }
        let name = CallName::parse(key)
            .ok_or_else(|| malformed(format!("`{key}` is not a tagged call name")))?;
        if name.tag == CallTag::Modifier {
            return Err(malformed(format!("`{key}` cannot start a call")));
        }
        builder_call = Some(MethodCall::new(name, decode_arguments(value)?));
    }
    let builder_call =
        builder_call.ok_or_else(|| malformed("call object has no call name"))?;
    Ok(ApiCall {
        name: None,
        builder_call,
        modifier_calls,
    })
}

fn decode_modifier(value: &Value) -> Result<MethodCall> {
    let properties = match value {
        Value::Object(properties) if properties.len() == 1 => properties,
        _ => {
            return Err(malformed(format!(
                "expected a single-property modifier object, found `{value}`",
            )));
        },
    };
    let Some((key, arguments)) = properties.iter().next() else {
        return Err(malformed("empty modifier object"));
    };
    match CallName::parse(key) {
        Some(name) if name.tag == CallTag::Modifier => {
            Ok(MethodCall::new(name, decode_arguments(arguments)?))
        },
        _ => Err(malformed(format!("`{key}` is not a modifier name"))),
    }
}

fn decode_arguments(value: &Value) -> Result<Vec<Argument>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(arguments) => arguments.iter().map(decode_argument).collect(),
        other => Err(malformed(format!(
            "expected null or an argument array, found `{other}`",
        ))),
    }
}

fn decode_argument(value: &Value) -> Result<Argument> {
    match value {
        Value::Bool(value) => Ok(Argument::Literal(Literal::Bool(*value))),
        Value::Number(number) => {
            if let Some(value) = number.as_i64() {
                Ok(Argument::Literal(Literal::Int(value)))
            } else if let Some(value) = number.as_f64() {
                Ok(Argument::Literal(Literal::Float(value)))
            } else {
                Err(malformed(format!("unsupported number `{number}`")))
            }
        },
        Value::String(text) => {
            if let Some(kind) = text.strip_prefix(CallTag::Kind.prefix()) {
                Ok(Argument::Kind(SyntaxKind::from(kind)))
            } else if let Some(escaped) = text.strip_prefix('\\') {
                Ok(Argument::str(escaped))
            } else {
                Ok(Argument::str(text.as_str()))
            }
        },
        Value::Object(_) => decode_call(value).map(Argument::Call),
        Value::Null | Value::Array(_) => Err(malformed(format!(
            "unexpected argument `{value}`",
        ))),
    }
}
