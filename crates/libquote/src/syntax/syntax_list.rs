use crate::syntax::SyntaxElementRef;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;
use crate::syntax::SyntaxTrivia;

/// The element layout of a list-valued attribute.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ListShape {
    Nodes,
    Separated,
    Tokens,
    Trivia,
}

/// An ordered, homogeneous list held by a node attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum SyntaxList {
    Nodes(Vec<SyntaxNode>),

    /// Nodes with separator tokens between them. `separators` has either one
    /// fewer entry than `nodes` or (with a trailing separator) the same
    /// number.
    Separated {
        nodes: Vec<SyntaxNode>,
        separators: Vec<SyntaxToken>,
    },

    Tokens(Vec<SyntaxToken>),
    Trivia(Vec<SyntaxTrivia>),
}

impl SyntaxList {
    pub fn empty(shape: ListShape) -> Self {
        match shape {
            ListShape::Nodes => Self::Nodes(Vec::new()),
            ListShape::Separated => Self::Separated {
                nodes: Vec::new(),
                separators: Vec::new(),
            },
            ListShape::Tokens => Self::Tokens(Vec::new()),
            ListShape::Trivia => Self::Trivia(Vec::new()),
        }
    }

    pub fn shape(&self) -> ListShape {
        match self {
            Self::Nodes(_) => ListShape::Nodes,
            Self::Separated { .. } => ListShape::Separated,
            Self::Tokens(_) => ListShape::Tokens,
            Self::Trivia(_) => ListShape::Trivia,
        }
    }

    /// Number of elements, counting separators.
    pub fn len(&self) -> usize {
        match self {
            Self::Nodes(nodes) => nodes.len(),
            Self::Separated { nodes, separators } => {
                nodes.len() + separators.len()
            },
            Self::Tokens(tokens) => tokens.len(),
            Self::Trivia(trivia) => trivia.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All elements in source order. For separated lists this is the
    /// node/separator interleaving `node0, sep0, node1, sep1, ...`.
    pub fn with_separators(&self) -> Vec<SyntaxElementRef<'_>> {
        match self {
            Self::Nodes(nodes) => {
                nodes.iter().map(SyntaxElementRef::Node).collect()
            },
            Self::Separated { nodes, separators } => {
                let mut elements =
                    Vec::with_capacity(nodes.len() + separators.len());
                let mut separators = separators.iter();
                for node in nodes {
                    elements.push(SyntaxElementRef::Node(node));
                    if let Some(separator) = separators.next() {
                        elements.push(SyntaxElementRef::Token(separator));
                    }
                }
                elements.extend(separators.map(SyntaxElementRef::Token));
                elements
            },
            Self::Tokens(tokens) => {
                tokens.iter().map(SyntaxElementRef::Token).collect()
            },
            Self::Trivia(trivia) => {
                trivia.iter().map(SyntaxElementRef::Trivia).collect()
            },
        }
    }
}
