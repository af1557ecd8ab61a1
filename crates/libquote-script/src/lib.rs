//! A small lossless C-family scripting language for `libquote`.
//!
//! The lexer keeps every byte of the input as token text or trivia, and the
//! parser recovers from errors with missing and skipped tokens, so every
//! parsed tree renders back to exactly its source text. [`ScriptLanguage`]
//! plugs the parser, its [`script_registry`] and the standard whitespace
//! layout into the quoting engine.

mod byte_span;
mod parse_result;
mod script_lexer;
mod script_parse_error;
mod script_parse_error_kind;
mod script_parser;
mod script_registry;
mod script_tokens;
mod script_whitespace_normalizer;
mod source_position;

pub use byte_span::ByteSpan;
pub use parse_result::ParseResult;
pub use script_lexer::LexedToken;
pub use script_lexer::ScriptLexer;
pub use script_parse_error::ScriptParseError;
pub use script_parse_error_kind::ScriptParseErrorKind;
pub use script_parser::ScriptParser;
pub use script_registry::script_registry;
pub use script_whitespace_normalizer::normalize_whitespace;
pub use source_position::SourcePosition;

use libquote::syntax::SyntaxNode;
use libquote::KindRegistry;
use libquote::SyntaxLanguage;
use libquote::WhitespaceNormalizer;

/// Parses `source` into a `CompilationUnit`, with any errors alongside.
pub fn parse_script(source: &str) -> ParseResult<SyntaxNode> {
    ScriptParser::new(source).parse_compilation_unit()
}

/// The script language as seen by the quoting engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptLanguage;

impl WhitespaceNormalizer for ScriptLanguage {
    fn normalize_whitespace(&self, node: &SyntaxNode) -> SyntaxNode {
        normalize_whitespace(node)
    }
}

impl SyntaxLanguage for ScriptLanguage {
    fn kind_registry(&self) -> &KindRegistry {
        script_registry()
    }

    fn parse(&self, source: &str) -> SyntaxNode {
        let result = parse_script(source);
        for error in &result.errors {
            log::debug!("{error}");
        }
        result.into_tree()
    }
}

#[cfg(test)]
mod tests;
