/// The resolved value of a literal-bearing or text-bearing token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    Str(String),
}

/// The variant of a [`TokenValue`], used by the registry to map a literal
/// value back to the token kind that carries it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenValueType {
    Int,
    Float,
    Str,
}

impl TokenValue {
    pub fn value_type(&self) -> TokenValueType {
        match self {
            Self::Int(_) => TokenValueType::Int,
            Self::Float(_) => TokenValueType::Float,
            Self::Str(_) => TokenValueType::Str,
        }
    }

    /// The text a builder produces for this value when no explicit text is
    /// given.
    ///
    /// Integers render in decimal, floats through `{:?}` (so `2.0` keeps its
    /// fraction), strings double-quoted with `\\`, `\"`, `\n`, `\r`, `\t` and
    /// `\0` escaped.
    pub fn canonical_text(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format!("{value:?}"),
            Self::Str(value) => {
                let mut text = String::with_capacity(value.len() + 2);
                text.push('"');
                for ch in value.chars() {
                    match ch {
                        '\\' => text.push_str("\\\\"),
                        '"' => text.push_str("\\\""),
                        '\n' => text.push_str("\\n"),
                        '\r' => text.push_str("\\r"),
                        '\t' => text.push_str("\\t"),
                        '\0' => text.push_str("\\0"),
                        other => text.push(other),
                    }
                }
                text.push('"');
                text
            },
        }
    }

    /// The value as text, as carried by text-bearing tokens.
    pub fn value_text(&self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => format!("{value:?}"),
            Self::Str(value) => value.clone(),
        }
    }
}
