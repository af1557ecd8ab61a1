//! Tree-to-call-tree quoting.

mod call_tree_assembler;
mod list_quoter;
mod overload_resolver;
mod property_quoter;
mod quoted_value;
#[allow(clippy::module_inception)]
mod quoter;
mod quoter_options;
mod token_quoter;
mod trivia_quoter;

pub use overload_resolver::resolve_builder;
pub use quoter::Quoter;
pub use quoter_options::QuoterOptions;
