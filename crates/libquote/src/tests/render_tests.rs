//! Tests for lossless rendering.

use crate::syntax::AttributeValue;
use crate::syntax::SyntaxElement;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxTrivia;
use crate::tests::fixtures::comment;
use crate::tests::fixtures::identifier_name;
use crate::tests::fixtures::identifier_token;
use crate::tests::fixtures::line_feed;
use crate::tests::fixtures::node;
use crate::tests::fixtures::space;
use crate::tests::fixtures::token;
use crate::Render;

/// Verifies that a token renders its leading trivia, text and trailing
/// trivia in order.
#[test]
fn token_renders_with_trivia() {
    let token = identifier_token("x")
        .with_leading([comment("/* a */"), space()])
        .with_trailing([line_feed()]);
    assert_eq!(token.to_full_string(), "/* a */ x\n");
    assert_eq!(SyntaxElement::from(token).to_full_string(), "/* a */ x\n");
}

/// Verifies that boolean, string and absent attributes contribute no text.
#[test]
fn node_skips_non_textual_attributes() {
    let node = SyntaxNode::new("Mixed")
        .with_attribute("Flag", true)
        .with_attribute("Label", "ignored".to_string())
        .with_attribute("Missing", AttributeValue::Absent)
        .with_attribute("Name", identifier_token("n"));
    assert_eq!(node.to_full_string(), "n");
}

/// Verifies that separated lists interleave separators, trailing one
/// included.
#[test]
fn separated_list_interleaves_separators() {
    let list = SyntaxList::Separated {
        nodes: vec![
            identifier_name(identifier_token("a")),
            identifier_name(identifier_token("b")),
        ],
        separators: vec![
            token("CommaToken").with_trailing([space()]),
            token("CommaToken"),
        ],
    };
    assert_eq!(list.len(), 4);
    assert_eq!(list.to_full_string(), "a, b,");

    let arguments = node("ArgumentList", vec![("Arguments", list.into())]);
    assert_eq!(arguments.to_full_string(), "(a, b,)");
}

/// Verifies that structured trivia render their structure.
#[test]
fn structured_trivia_render_their_structure() {
    let directive = node("RegionDirectiveTrivia", vec![(
        "RegionKeyword",
        token("RegionKeyword").with_trailing([space()]).into(),
    )]);
    let trivia = SyntaxTrivia::structured(directive);
    assert_eq!(trivia.text, "#region ");
    assert_eq!(trivia.to_full_string(), "#region ");
}

/// Verifies that generic code can render through the trait.
#[test]
fn render_trait_is_usable_generically() {
    fn render_all<R: Render>(items: &[R]) -> String {
        let mut text = String::new();
        for item in items {
            item.append_full_text(&mut text);
        }
        text
    }
    assert_eq!(render_all(&[space(), comment("// x"), line_feed()]), " // x\n");
}
