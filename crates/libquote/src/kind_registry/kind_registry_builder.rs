use crate::kind_registry::KindRegistry;
use crate::kind_registry::NodeType;
use crate::kind_registry::TokenCategory;
use crate::kind_registry::TokenSchema;
use crate::kind_registry::TriviaCategory;
use crate::kind_registry::TriviaSchema;
use crate::kind_registry::WellKnownTrivia;
use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxTrivia;
use crate::syntax::TokenValueType;

/// Fluent builder for a [`KindRegistry`].
#[derive(Debug, Default)]
pub struct KindRegistryBuilder {
    registry: KindRegistry,
}

impl KindRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_type(mut self, node_type: NodeType) -> Self {
        let registry = &mut self.registry;
        let (type_index, _) =
            registry.node_types.insert_full(node_type.name.clone(), node_type);
        let node_type = &registry.node_types[type_index];
        for kind in &node_type.kinds {
            registry.node_type_by_kind.insert(kind.clone(), type_index);
        }
        for (builder_index, builder) in node_type.builders.iter().enumerate() {
            registry
                .node_builders
                .entry(builder.name.clone())
                .or_default()
                .push((type_index, builder_index));
        }
        self
    }

    fn token_schema(
        mut self,
        kind: &str,
        category: TokenCategory,
        default_text: &str,
    ) -> Self {
        let kind = SyntaxKind::from(kind);
        self.registry.tokens.insert(kind.clone(), TokenSchema {
            kind,
            category,
            default_text: default_text.to_string(),
        });
        self
    }

    /// Declares a keyword or punctuation token with fixed text.
    pub fn token(self, kind: &str, text: &str) -> Self {
        self.token_schema(kind, TokenCategory::Fixed, text)
    }

    pub fn identifier_token(self, kind: &str) -> Self {
        self.token_schema(kind, TokenCategory::Identifier, "")
    }

    /// Declares a literal token kind and makes it the carrier of literal
    /// values of each of `value_types`.
    pub fn literal_token(
        mut self,
        kind: &str,
        value_types: &[TokenValueType],
    ) -> Self {
        for value_type in value_types {
            self.registry
                .literal_kinds
                .insert(*value_type, SyntaxKind::from(kind));
        }
        self.token_schema(kind, TokenCategory::Literal, "")
    }

    pub fn text_token(self, kind: &str, builder: &str, with_kind: bool) -> Self {
        self.token_schema(
            kind,
            TokenCategory::Text {
                builder: builder.to_string(),
                with_kind,
            },
            "",
        )
    }

    pub fn bad_token(self, kind: &str) -> Self {
        self.token_schema(kind, TokenCategory::Bad, "")
    }

    pub fn trivia(
        mut self,
        kind: &str,
        category: TriviaCategory,
        prefix: Option<&str>,
    ) -> Self {
        let kind = SyntaxKind::from(kind);
        self.registry.trivia.insert(kind.clone(), TriviaSchema {
            kind,
            category,
            prefix: prefix.map(str::to_string),
        });
        self
    }

    pub fn well_known(mut self, name: &str, kind: &str, text: &str) -> Self {
        self.registry.well_known.insert(name.to_string(), WellKnownTrivia {
            name: name.to_string(),
            trivia: SyntaxTrivia::new(kind, text),
        });
        self
    }

    pub fn build(self) -> KindRegistry {
        let registry = self.registry;
        for error in registry.check_consistency() {
            log::warn!("inconsistent kind registry: {error}");
        }
        log::debug!(
            "built kind registry: {} node types, {} token kinds, {} trivia \
            kinds",
            registry.node_types.len(),
            registry.tokens.len(),
            registry.trivia.len(),
        );
        registry
    }
}
