//! The call-tree model produced by the quoter.

mod api_call;
mod argument;
mod call_name;
mod literal;
mod method_call;

pub use api_call::ApiCall;
pub use argument::Argument;
pub use call_name::CallName;
pub use call_name::CallTag;
pub use literal::Literal;
pub use method_call::MethodCall;
