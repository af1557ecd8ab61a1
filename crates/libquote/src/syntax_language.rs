use crate::kind_registry::KindRegistry;
use crate::syntax::SyntaxNode;

/// Re-derives standard whitespace for a tree.
///
/// Used after replaying call trees quoted with default formatting, which
/// drop whitespace trivia.
pub trait WhitespaceNormalizer {
    /// Returns a copy of `node` with whitespace and line-break trivia
    /// replaced by the language's standard layout. Comments and directives
    /// are kept.
    fn normalize_whitespace(&self, node: &SyntaxNode) -> SyntaxNode;
}

/// A language the engine can quote from source: a parser, its kind registry
/// and its whitespace normalizer.
pub trait SyntaxLanguage: WhitespaceNormalizer + Sync {
    fn kind_registry(&self) -> &KindRegistry;

    /// Parses `source` into a lossless tree. Parsing never fails; malformed
    /// input yields missing and bad tokens.
    fn parse(&self, source: &str) -> SyntaxNode;
}
