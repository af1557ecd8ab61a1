use crate::kind_registry::AttributeSchema;
use crate::kind_registry::BuilderSpec;
use crate::syntax::SyntaxKind;
use indexmap::IndexMap;

/// Extra overload-resolution guidance for a node type.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ResolutionHint {
    #[default]
    None,

    /// Literal-like types: kinds in `kind_only` use the one-parameter
    /// builder, every other kind the two-parameter one.
    Literal { kind_only: Vec<SyntaxKind> },

    /// Declaration-like and simple-name-like types: use the first builder
    /// whose first parameter is a plain string.
    PreferStringName,
}

/// A node type: the kinds it covers, its attributes and its builders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeType {
    pub name: String,
    pub kinds: Vec<SyntaxKind>,
    pub attributes: Vec<AttributeSchema>,
    pub builders: Vec<BuilderSpec>,

    /// Builders of this type take the node kind as a leading argument.
    pub kind_selector: bool,

    pub hint: ResolutionHint,

    /// Per-kind token defaults that override
    /// [`AttributeSchema::default_token`].
    pub kind_default_tokens: IndexMap<SyntaxKind, IndexMap<String, SyntaxKind>>,
}

impl NodeType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kinds: Vec::new(),
            attributes: Vec::new(),
            builders: Vec::new(),
            kind_selector: false,
            hint: ResolutionHint::None,
            kind_default_tokens: IndexMap::new(),
        }
    }

    /// Adds a kind. The first kind added is the one builders without a kind
    /// argument produce.
    pub fn kind(mut self, kind: impl Into<SyntaxKind>) -> Self {
        self.kinds.push(kind.into());
        self
    }

    /// Adds a kind together with its token defaults.
    pub fn kind_with_tokens(
        mut self,
        kind: impl Into<SyntaxKind>,
        tokens: &[(&str, &str)],
    ) -> Self {
        let kind = kind.into();
        self.kind_default_tokens.insert(
            kind.clone(),
            tokens
                .iter()
                .map(|(attr, token)| (attr.to_string(), SyntaxKind::from(*token)))
                .collect(),
        );
        self.kinds.push(kind);
        self
    }

    pub fn attribute(mut self, attribute: AttributeSchema) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn builder(mut self, builder: BuilderSpec) -> Self {
        self.builders.push(builder);
        self
    }

    pub fn with_kind_selector(mut self) -> Self {
        self.kind_selector = true;
        self
    }

    pub fn with_hint(mut self, hint: ResolutionHint) -> Self {
        self.hint = hint;
        self
    }

    /// Looks up a structural attribute by case-insensitive name.
    pub fn structural_attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes
            .iter()
            .find(|attr| attr.structural && attr.name.eq_ignore_ascii_case(name))
    }

    /// The token kind a new node of `kind` holds in `attribute`, if any.
    pub fn default_token<'a>(
        &'a self,
        kind: &SyntaxKind,
        attribute: &'a AttributeSchema,
    ) -> Option<&'a SyntaxKind> {
        self.kind_default_tokens
            .get(kind)
            .and_then(|tokens| tokens.get(&attribute.name))
            .or(attribute.default_token.as_ref())
    }
}
