/// Options controlling how a [`Quoter`](crate::Quoter) encodes trees.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuoterOptions {
    /// Drop whitespace and well-known trivia, relying on whitespace
    /// normalization after replay to restore a standard layout.
    pub use_default_formatting: bool,

    /// Keep a modifier call only when replaying it changes the rendering.
    pub remove_redundant_modifying_calls: bool,
}

impl Default for QuoterOptions {
    fn default() -> Self {
        Self {
            use_default_formatting: false,
            remove_redundant_modifying_calls: true,
        }
    }
}
