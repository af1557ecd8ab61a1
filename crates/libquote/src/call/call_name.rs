use std::fmt;

/// The discriminator prefixed to every call name in interchange text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CallTag {
    /// `f:` a builder (factory) call.
    Builder,
    /// `w:` a modifier ("with") call.
    Modifier,
    /// `k:` a kind literal.
    Kind,
    /// `a:` an array literal.
    Array,
}

impl CallTag {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Builder => "f:",
            Self::Modifier => "w:",
            Self::Kind => "k:",
            Self::Array => "a:",
        }
    }

    /// Splits a tagged name such as `f:Block` into its tag and bare name.
    pub fn split(tagged: &str) -> Option<(Self, &str)> {
        [Self::Builder, Self::Modifier, Self::Kind, Self::Array]
            .into_iter()
            .find_map(|tag| {
                tagged.strip_prefix(tag.prefix()).map(|name| (tag, name))
            })
    }
}

/// A tagged call name, e.g. `f:BinaryExpression` or `w:OperatorToken`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CallName {
    pub tag: CallTag,
    pub name: String,
}

impl CallName {
    pub fn new(tag: CallTag, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
        }
    }

    /// Parses a tagged name. Kind tags do not name calls and are rejected.
    pub fn parse(tagged: &str) -> Option<Self> {
        match CallTag::split(tagged)? {
            (CallTag::Kind, _) => None,
            (_, "") => None,
            (tag, name) => Some(Self::new(tag, name)),
        }
    }
}

impl fmt::Display for CallName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag.prefix(), self.name)
    }
}
