//! The statically declared builder registry.
//!
//! A [`KindRegistry`] describes, for one language, every node type (its
//! kinds, attributes and builder overloads), every token kind and every
//! trivia kind. The quoter consults it to decide which attributes matter and
//! which builder to call; the replayer consults it to execute those calls.

mod attribute_schema;
mod builder_spec;
#[allow(clippy::module_inception)]
mod kind_registry;
mod kind_registry_builder;
mod node_type;
mod registry_consistency_error;
mod token_schema;
mod trivia_schema;

pub use attribute_schema::AttributeSchema;
pub use attribute_schema::AttributeType;
pub use builder_spec::BuilderParam;
pub use builder_spec::BuilderSpec;
pub use builder_spec::ParamType;
pub use kind_registry::KindRegistry;
pub use kind_registry_builder::KindRegistryBuilder;
pub use node_type::NodeType;
pub use node_type::ResolutionHint;
pub use registry_consistency_error::RegistryConsistencyError;
pub use token_schema::TokenCategory;
pub use token_schema::TokenSchema;
pub use trivia_schema::TriviaCategory;
pub use trivia_schema::TriviaSchema;
pub use trivia_schema::WellKnownTrivia;
