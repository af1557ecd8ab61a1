//! A quoting engine for lossless syntax trees.
//!
//! Given a tree of [`syntax::SyntaxNode`]s, the [`Quoter`] answers "which
//! sequence of builder calls rebuilds exactly this tree?". The answer is an
//! [`ApiCall`] tree that the [`Replayer`] can execute against the same
//! [`KindRegistry`] to reconstruct a tree whose rendered text is identical to
//! the original, whitespace and comments included.
//!
//! Call trees serialize to a compact JSON interchange format (see
//! [`interchange`]) so they can be stored and replayed later.

pub mod call;
pub mod interchange;
pub mod kind_registry;
mod quote_error;
pub mod quoter;
pub mod render;
pub mod replay;
pub mod syntax;
mod syntax_language;

pub use call::ApiCall;
pub use call::Argument;
pub use call::CallName;
pub use call::CallTag;
pub use call::Literal;
pub use call::MethodCall;
pub use kind_registry::KindRegistry;
pub use quote_error::QuoteError;
pub use quoter::Quoter;
pub use quoter::QuoterOptions;
pub use render::Render;
pub use replay::ReplayValue;
pub use replay::Replayer;
pub use syntax_language::SyntaxLanguage;
pub use syntax_language::WhitespaceNormalizer;

use crate::syntax::SyntaxNode;

type Result<T> = std::result::Result<T, QuoteError>;

/// Parses `source` with `language` and quotes the resulting tree.
pub fn quote_source<L: SyntaxLanguage>(
    language: &L,
    source: &str,
    options: QuoterOptions,
) -> Result<ApiCall> {
    let tree = language.parse(source);
    let api_call = Quoter::new(language.kind_registry())
        .with_options(options)
        .with_normalizer(language)
        .quote_node(&tree)?;
    log::debug!(
        "quoted {} bytes of source into `{}` with {} modifier call(s)",
        source.len(),
        api_call.builder_call.name,
        api_call.modifier_calls.len(),
    );
    Ok(api_call)
}

/// Parses `source`, quotes it and writes the call tree as interchange text.
pub fn quote_source_to_interchange<L: SyntaxLanguage>(
    language: &L,
    source: &str,
    options: QuoterOptions,
    pretty: bool,
) -> Result<String> {
    let api_call = quote_source(language, source, options)?;
    interchange::encode(&api_call, pretty)
}

/// Decodes interchange text and replays it into a live tree.
///
/// Quoting with default formatting drops whitespace trivia, so callers that
/// produced `text` that way should pass `normalize = true` to have the
/// language re-derive standard whitespace after replay.
pub fn parse_interchange<L: SyntaxLanguage>(
    language: &L,
    text: &str,
    normalize: bool,
) -> Result<SyntaxNode> {
    let api_call = interchange::decode(text)?;
    let node = Replayer::new(language.kind_registry()).replay_node(&api_call)?;
    log::debug!(
        "replayed `{}` with {} modifier call(s) from {} bytes of interchange text",
        api_call.builder_call.name,
        api_call.modifier_calls.len(),
        text.len(),
    );
    if normalize {
        Ok(language.normalize_whitespace(&node))
    } else {
        Ok(node)
    }
}

#[cfg(test)]
mod tests;
