//! Result type for parsing operations that recover from errors.

use crate::ScriptParseError;

/// The result of parsing a script.
///
/// Unlike `Result<T, E>`, a `ParseResult` always carries a tree and may carry
/// errors alongside it. The parser recovers by inserting missing tokens and
/// skipping unexpected ones, so the tree still renders to exactly the input
/// text and can be quoted like any other.
///
/// - [`valid_tree()`](Self::valid_tree) returns the tree only when parsing
///   produced no errors.
/// - [`tree()`](Self::tree) returns it regardless.
#[derive(Debug)]
pub struct ParseResult<TTree> {
    tree: TTree,

    /// Errors encountered during parsing. Empty on a clean parse.
    pub errors: Vec<ScriptParseError>,
}

impl<TTree> ParseResult<TTree> {
    /// Creates a recovered parse result with both a tree and errors.
    pub(crate) fn recovered(tree: TTree, errors: Vec<ScriptParseError>) -> Self {
        Self { tree, errors }
    }

    /// Returns the tree only if parsing was completely successful.
    pub fn valid_tree(&self) -> Option<&TTree> {
        if self.errors.is_empty() {
            Some(&self.tree)
        } else {
            None
        }
    }

    /// Returns the tree, whether or not errors occurred.
    pub fn tree(&self) -> &TTree {
        &self.tree
    }

    /// Consuming version of [`valid_tree()`](Self::valid_tree).
    pub fn into_valid_tree(self) -> Option<TTree> {
        if self.errors.is_empty() {
            Some(self.tree)
        } else {
            None
        }
    }

    /// Consuming version of [`tree()`](Self::tree).
    pub fn into_tree(self) -> TTree {
        self.tree
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Formats all errors as a single string for display.
    pub fn format_errors(&self, source: Option<&str>) -> String {
        self.errors
            .iter()
            .map(|e| e.format_detailed(source))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<TTree> From<ParseResult<TTree>> for Result<TTree, Vec<ScriptParseError>> {
    /// Treats recovered trees as errors.
    fn from(result: ParseResult<TTree>) -> Self {
        if result.errors.is_empty() {
            Ok(result.tree)
        } else {
            Err(result.errors)
        }
    }
}
