use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxTrivia;

/// The builder family a trivia kind belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TriviaCategory {
    Whitespace,
    EndOfLine,
    Comment,
    DocumentationComment,
    PreprocessingMessage,
    DisabledText,
    DocumentationCommentExterior,

    /// Trivia carrying a nested node (directives).
    Structured,
}

impl TriviaCategory {
    pub fn builder_name(&self) -> &'static str {
        match self {
            Self::Whitespace => "Whitespace",
            Self::EndOfLine => "EndOfLine",
            Self::Comment => "Comment",
            Self::DocumentationComment => "DocumentationComment",
            Self::PreprocessingMessage => "PreprocessingMessage",
            Self::DisabledText => "DisabledText",
            Self::DocumentationCommentExterior => {
                "DocumentationCommentExterior"
            },
            Self::Structured => "Trivia",
        }
    }

    pub fn from_builder_name(name: &str) -> Option<Self> {
        [
            Self::Whitespace,
            Self::EndOfLine,
            Self::Comment,
            Self::DocumentationComment,
            Self::PreprocessingMessage,
            Self::DisabledText,
            Self::DocumentationCommentExterior,
            Self::Structured,
        ]
        .into_iter()
        .find(|category| category.builder_name() == name)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TriviaSchema {
    pub kind: SyntaxKind,
    pub category: TriviaCategory,

    /// Text prefix that identifies this kind among kinds of the same
    /// category (`//` versus `/*`).
    pub prefix: Option<String>,
}

/// A named trivia singleton such as `Space` or `LineFeed`.
#[derive(Clone, Debug, PartialEq)]
pub struct WellKnownTrivia {
    pub name: String,
    pub trivia: SyntaxTrivia,
}
