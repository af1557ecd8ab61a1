use crate::kind_registry::AttributeType;
use crate::kind_registry::BuilderSpec;
use crate::kind_registry::KindRegistryBuilder;
use crate::kind_registry::NodeType;
use crate::kind_registry::ParamType;
use crate::kind_registry::RegistryConsistencyError;
use crate::kind_registry::TokenCategory;
use crate::kind_registry::TokenSchema;
use crate::kind_registry::TriviaCategory;
use crate::kind_registry::TriviaSchema;
use crate::kind_registry::WellKnownTrivia;
use crate::syntax::AttributeValue;
use crate::syntax::SyntaxAttribute;
use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;
use crate::syntax::SyntaxTrivia;
use crate::syntax::TokenValueType;
use indexmap::IndexMap;

/// Immutable description of one language's node, token and trivia kinds and
/// of the builders that create them.
///
/// Built once through [`KindRegistryBuilder`] and shared read-only
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct KindRegistry {
    pub(super) node_types: IndexMap<String, NodeType>,
    pub(super) node_type_by_kind: IndexMap<SyntaxKind, usize>,
    pub(super) node_builders: IndexMap<String, Vec<(usize, usize)>>,
    pub(super) tokens: IndexMap<SyntaxKind, TokenSchema>,
    pub(super) trivia: IndexMap<SyntaxKind, TriviaSchema>,
    pub(super) well_known: IndexMap<String, WellKnownTrivia>,
    pub(super) literal_kinds: IndexMap<TokenValueType, SyntaxKind>,
}

impl KindRegistry {
    pub fn builder() -> KindRegistryBuilder {
        KindRegistryBuilder::new()
    }

    pub fn node_types(&self) -> impl Iterator<Item = &NodeType> {
        self.node_types.values()
    }

    pub fn node_type(&self, name: &str) -> Option<&NodeType> {
        self.node_types.get(name)
    }

    pub fn node_type_of(&self, kind: &SyntaxKind) -> Option<&NodeType> {
        let index = *self.node_type_by_kind.get(kind)?;
        self.node_types.get_index(index).map(|(_, node_type)| node_type)
    }

    /// All node builders with the given name, in declaration order.
    pub fn node_builders(
        &self,
        name: &str,
    ) -> impl Iterator<Item = (&NodeType, &BuilderSpec)> {
        self.node_builders
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|(type_index, builder_index)| {
                let (_, node_type) = self.node_types.get_index(*type_index)?;
                Some((node_type, node_type.builders.get(*builder_index)?))
            })
    }

    pub fn token_schema(&self, kind: &SyntaxKind) -> Option<&TokenSchema> {
        self.tokens.get(kind)
    }

    pub fn trivia_schema(&self, kind: &SyntaxKind) -> Option<&TriviaSchema> {
        self.trivia.get(kind)
    }

    /// The token kind that carries literal values of `value_type`.
    pub fn literal_kind(&self, value_type: TokenValueType) -> Option<&SyntaxKind> {
        self.literal_kinds.get(&value_type)
    }

    pub fn identifier_kind(&self) -> Option<&SyntaxKind> {
        self.first_token_of(|category| *category == TokenCategory::Identifier)
    }

    pub fn bad_kind(&self) -> Option<&SyntaxKind> {
        self.first_token_of(|category| *category == TokenCategory::Bad)
    }

    /// The token kind built by a text builder that does not take a kind
    /// argument.
    pub fn text_builder_kind(&self, builder: &str) -> Option<&SyntaxKind> {
        self.first_token_of(|category| {
            matches!(
                category,
                TokenCategory::Text { builder: name, with_kind: false }
                    if name == builder,
            )
        })
    }

    fn first_token_of(
        &self,
        predicate: impl Fn(&TokenCategory) -> bool,
    ) -> Option<&SyntaxKind> {
        self.tokens
            .values()
            .find(|schema| predicate(&schema.category))
            .map(|schema| &schema.kind)
    }

    /// The trivia kind of `category` whose prefix is the longest one `text`
    /// starts with. Kinds without a prefix match any text.
    pub fn trivia_kind_for(
        &self,
        category: TriviaCategory,
        text: &str,
    ) -> Option<&SyntaxKind> {
        self.trivia
            .values()
            .filter(|schema| schema.category == category)
            .filter(|schema| {
                schema
                    .prefix
                    .as_deref()
                    .is_none_or(|prefix| text.starts_with(prefix))
            })
            .max_by_key(|schema| {
                schema.prefix.as_deref().map_or(0, |prefix| prefix.len())
            })
            .map(|schema| &schema.kind)
    }

    pub fn well_known(&self, name: &str) -> Option<&WellKnownTrivia> {
        self.well_known.get(name)
    }

    /// The well-known singleton equal in kind and text to `trivia`.
    pub fn find_well_known(
        &self,
        trivia: &SyntaxTrivia,
    ) -> Option<&WellKnownTrivia> {
        if trivia.is_structured() {
            return None;
        }
        self.well_known.values().find(|well_known| {
            well_known.trivia.kind == trivia.kind
                && well_known.trivia.text == trivia.text
        })
    }

    /// A token of `kind` with its default text and no trivia.
    pub fn make_token(&self, kind: &SyntaxKind) -> SyntaxToken {
        let text = self
            .tokens
            .get(kind)
            .map(|schema| schema.default_text.as_str())
            .unwrap_or_default();
        SyntaxToken::new(kind.clone(), text)
    }

    /// Creates a node of `kind` holding every attribute of its node type in
    /// schema order, each set to its default: absent nodes, default tokens
    /// (or absent), empty lists, `false` and empty strings.
    ///
    /// Returns `None` for kinds no node type covers.
    pub fn instantiate(&self, kind: &SyntaxKind) -> Option<SyntaxNode> {
        let node_type = self.node_type_of(kind)?;
        let attributes = node_type
            .attributes
            .iter()
            .map(|attribute| {
                let value = match &attribute.ty {
                    AttributeType::Bool => AttributeValue::Bool(false),
                    AttributeType::Str => AttributeValue::Str(String::new()),
                    AttributeType::Node => AttributeValue::Absent,
                    AttributeType::Token => {
                        match node_type.default_token(kind, attribute) {
                            Some(token_kind) => {
                                AttributeValue::Token(self.make_token(token_kind))
                            },
                            None => AttributeValue::Absent,
                        }
                    },
                    AttributeType::List { shape, .. } => {
                        AttributeValue::List(SyntaxList::empty(*shape))
                    },
                };
                SyntaxAttribute {
                    name: attribute.name.clone(),
                    value,
                }
            })
            .collect();
        Some(SyntaxNode {
            kind: kind.clone(),
            attributes,
        })
    }

    /// Checks the declarations quoting and replay rely on:
    ///
    /// - every node type covers at least one kind;
    /// - overloads sharing a name never accept the same argument shapes;
    /// - a builder whose first parameter is a string has an overload taking
    ///   a token in that position;
    /// - token defaults name declared token kinds.
    pub fn check_consistency(&self) -> Vec<RegistryConsistencyError> {
        let mut errors = Vec::new();
        for node_type in self.node_types.values() {
            if node_type.kinds.is_empty() {
                errors.push(RegistryConsistencyError::NodeTypeWithoutKinds {
                    node_type: node_type.name.clone(),
                });
            }
            let defaults = node_type
                .attributes
                .iter()
                .filter_map(|attr| {
                    Some((attr.name.as_str(), attr.default_token.as_ref()?))
                })
                .chain(node_type.kind_default_tokens.values().flat_map(|tokens| {
                    tokens.iter().map(|(attr, kind)| (attr.as_str(), kind))
                }));
            for (attribute, kind) in defaults {
                if !self.tokens.contains_key(kind) {
                    errors.push(RegistryConsistencyError::UnknownTokenKind {
                        node_type: node_type.name.clone(),
                        attribute: attribute.to_string(),
                        kind: kind.clone(),
                    });
                }
            }
        }

        for name in self.node_builders.keys() {
            let overloads: Vec<&BuilderSpec> = self
                .node_builders(name)
                .map(|(_, builder)| builder)
                .collect();
            let ambiguous = overloads.iter().enumerate().any(|(i, a)| {
                let a_shapes = a.accepted_shapes();
                overloads[i + 1..].iter().any(|b| {
                    b.accepted_shapes()
                        .iter()
                        .any(|shape| a_shapes.contains(shape))
                })
            });
            if ambiguous {
                errors.push(RegistryConsistencyError::AmbiguousOverloads {
                    builder: name.clone(),
                });
            }

            for builder in &overloads {
                let Some(first) = builder.params.first() else {
                    continue;
                };
                if first.ty != ParamType::Str {
                    continue;
                }
                let has_twin = overloads.iter().any(|other| {
                    other.params.len() == builder.params.len()
                        && other.params.first().map(|p| p.ty)
                            == Some(ParamType::Token)
                        && other.params[1..]
                            .iter()
                            .zip(&builder.params[1..])
                            .all(|(a, b)| a.ty == b.ty)
                });
                if !has_twin {
                    errors.push(RegistryConsistencyError::MissingTokenTwin {
                        builder: name.clone(),
                    });
                }
            }
        }
        errors
    }
}
