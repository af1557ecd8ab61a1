use crate::call::ApiCall;
use crate::kind_registry::KindRegistry;
use crate::quoter::overload_resolver::resolve_builder;
use crate::quoter::QuoterOptions;
use crate::syntax::SyntaxElementRef;
use crate::syntax::SyntaxNode;
use crate::QuoteError;
use crate::WhitespaceNormalizer;

type Result<T> = std::result::Result<T, QuoteError>;

/// Converts trees into the [`ApiCall`]s that rebuild them.
///
/// A quoter borrows a [`KindRegistry`] and, optionally, the language's
/// [`WhitespaceNormalizer`], which redundant-modifier elimination uses to
/// compare renderings the way they will look after replay under default
/// formatting.
///
/// # Example
///
/// ```ignore
/// let api_call = Quoter::new(&registry)
///     .with_options(QuoterOptions::default())
///     .quote_node(&tree)?;
/// ```
pub struct Quoter<'a> {
    pub(super) registry: &'a KindRegistry,
    pub(super) options: QuoterOptions,
    pub(super) normalizer: Option<&'a dyn WhitespaceNormalizer>,
}

impl<'a> Quoter<'a> {
    pub fn new(registry: &'a KindRegistry) -> Self {
        Self {
            registry,
            options: QuoterOptions::default(),
            normalizer: None,
        }
    }

    pub fn with_options(mut self, options: QuoterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_normalizer(
        mut self,
        normalizer: &'a dyn WhitespaceNormalizer,
    ) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Quotes `node` into a single builder call plus the modifiers needed on
    /// top of it.
    pub fn quote_node(&self, node: &SyntaxNode) -> Result<ApiCall> {
        let node_type = self.registry.node_type_of(&node.kind).ok_or_else(|| {
            QuoteError::UnsupportedNodeKind {
                kind: node.kind.clone(),
            }
        })?;
        let builder = resolve_builder(node_type, &node.kind)?;
        log::trace!("quoting `{}` with builder `{}`", node.kind, builder.name);
        let values = self.quote_properties(node, node_type)?;
        self.assemble(node_type, builder, values)
    }

    /// Quotes any element. Returns `None` for elements that contribute
    /// nothing to the call tree (skipped trivia).
    pub fn quote_element(
        &self,
        element: SyntaxElementRef<'_>,
    ) -> Result<Option<ApiCall>> {
        match element {
            SyntaxElementRef::Node(node) => self.quote_node(node).map(Some),
            SyntaxElementRef::Token(token) => self.quote_token(token),
            SyntaxElementRef::Trivia(trivia) => self.quote_trivia(trivia),
        }
    }
}
