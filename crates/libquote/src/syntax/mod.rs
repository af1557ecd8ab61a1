//! The closed tagged-variant tree model consumed by the quoter.
//!
//! A tree is made of [`SyntaxNode`]s (kind plus named attributes),
//! [`SyntaxToken`]s (kind, text, optional value, leading and trailing trivia)
//! and [`SyntaxTrivia`] (kind, text, optional nested structure). Nothing in
//! this module knows about a particular language; kinds are plain names whose
//! meaning comes from a [`KindRegistry`](crate::KindRegistry).

mod attribute_value;
mod syntax_element;
mod syntax_kind;
mod syntax_list;
mod syntax_node;
mod syntax_token;
mod syntax_trivia;
mod token_value;

pub use attribute_value::AttributeValue;
pub use syntax_element::SyntaxElement;
pub use syntax_element::SyntaxElementRef;
pub use syntax_kind::SyntaxKind;
pub use syntax_list::ListShape;
pub use syntax_list::SyntaxList;
pub use syntax_node::SyntaxAttribute;
pub use syntax_node::SyntaxNode;
pub use syntax_token::SyntaxToken;
pub use syntax_token::TriviaVec;
pub use syntax_trivia::SyntaxTrivia;
pub use token_value::TokenValue;
pub use token_value::TokenValueType;
