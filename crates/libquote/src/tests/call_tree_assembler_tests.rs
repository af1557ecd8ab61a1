//! Tests for binding quoted values to builder parameters and for
//! redundant-modifier elimination.

use crate::call::ApiCall;
use crate::kind_registry::AttributeSchema;
use crate::kind_registry::BuilderParam;
use crate::kind_registry::BuilderSpec;
use crate::kind_registry::KindRegistry;
use crate::kind_registry::NodeType;
use crate::kind_registry::ParamType;
use crate::kind_registry::ResolutionHint;
use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxNode;
use crate::tests::fixtures::binary;
use crate::tests::fixtures::comment;
use crate::tests::fixtures::expression_statement;
use crate::tests::fixtures::identifier_name;
use crate::tests::fixtures::identifier_token;
use crate::tests::fixtures::node;
use crate::tests::fixtures::number;
use crate::tests::fixtures::number_token;
use crate::tests::fixtures::quoter;
use crate::tests::fixtures::quoter_with;
use crate::tests::fixtures::registry;
use crate::tests::fixtures::round_trip;
use crate::tests::fixtures::space;
use crate::tests::fixtures::token;
use crate::tests::fixtures::StripWhitespace;
use crate::QuoteError;
use crate::Quoter;
use crate::QuoterOptions;
use crate::Replayer;

/// `a + 1` with the spacing given by `spaced`.
fn addition(spaced: bool) -> SyntaxNode {
    let (a, plus) = if spaced {
        (
            identifier_token("a").with_trailing([space()]),
            token("PlusToken").with_trailing([space()]),
        )
    } else {
        (identifier_token("a"), token("PlusToken"))
    };
    let mut tree = binary(
        "AddExpression",
        identifier_name(a),
        number(number_token("1", 1)),
    );
    tree.set_attribute("OperatorToken", plus);
    tree
}

fn render(api_call: &ApiCall) -> String {
    Replayer::new(registry())
        .replay(api_call)
        .expect("replays")
        .to_full_string()
}

/// Verifies that the kind selector binds to the `kind` parameter and a
/// token equal to its default is not emitted as a modifier.
#[test]
fn default_valued_modifier_is_eliminated() {
    let call = quoter().quote_node(&addition(false)).expect("quotes");
    assert_eq!(
        call.to_string(),
        "f:BinaryExpression(k:AddExpression, f:IdentifierName(\"a\"), \
         f:LiteralExpression(k:NumericLiteralExpression, f:Literal(1)))",
    );
}

/// Verifies that a modifier that changes the rendering is kept, and that
/// the result round-trips.
#[test]
fn changing_modifier_is_kept() {
    let tree = addition(true);
    let call = quoter().quote_node(&tree).expect("quotes");
    assert_eq!(call.modifier_calls.len(), 1);
    assert_eq!(call.modifier_calls[0].name.to_string(), "w:OperatorToken");
    assert_eq!(render(&call), "a + 1");
    assert_eq!(render(&call), tree.to_full_string());
}

/// Verifies that with elimination disabled every leftover value becomes a
/// modifier.
#[test]
fn elimination_can_be_disabled() {
    let quoter = quoter_with(QuoterOptions {
        remove_redundant_modifying_calls: false,
        ..QuoterOptions::default()
    });
    let call = quoter.quote_node(&addition(false)).expect("quotes");
    assert!(
        call.to_string().ends_with(".w:OperatorToken(f:Token(k:PlusToken))"),
        "{call}",
    );
    assert_eq!(render(&call), "a+1");
}

/// Verifies that an absent child produces neither an argument nor a
/// modifier.
#[test]
fn absent_child_is_not_quoted() {
    let tree = registry()
        .instantiate(&SyntaxKind::from("ReturnStatement"))
        .expect("ReturnStatement is registered");
    let call = quoter().quote_node(&tree).expect("quotes");
    assert!(!call.to_string().contains("Expression"), "{call}");
    assert!(call.modifier_calls.is_empty(), "{call}");
    assert_eq!(round_trip(&quoter(), &tree), "return;");
}

/// Verifies that kind-only literals drop their default keyword token.
#[test]
fn kind_only_literal_needs_no_token() {
    let tree = node("TrueLiteralExpression", vec![]);
    let call = quoter().quote_node(&tree).expect("quotes");
    assert_eq!(call.to_string(), "f:LiteralExpression(k:TrueLiteralExpression)");
    assert_eq!(round_trip(&quoter(), &tree), "true");
}

/// Verifies that a string `name` parameter receives the whole identifier
/// call when the identifier carries trivia.
#[test]
fn name_parameter_takes_whole_identifier_with_trivia() {
    let tree = identifier_name(identifier_token("x").with_trailing([space()]));
    let call = quoter().quote_node(&tree).expect("quotes");
    assert_eq!(
        call.to_string(),
        "f:IdentifierName(f:Identifier(f:TriviaList(), \"x\", \
         f:TriviaList(f:Space())))",
    );
    assert_eq!(round_trip(&quoter(), &tree), "x ");
}

/// Verifies the `identifier` parameter rule: the bare string for a simple
/// identifier, normal lookup otherwise.
#[test]
fn identifier_parameter_takes_simple_text_only() {
    let registry = KindRegistry::builder()
        .identifier_token("IdentifierToken")
        .trivia("WhitespaceTrivia", crate::kind_registry::TriviaCategory::Whitespace, None)
        .node_type(
            NodeType::new("Label")
                .kind("Label")
                .attribute(AttributeSchema::token("Identifier"))
                .with_hint(ResolutionHint::PreferStringName)
                .builder(BuilderSpec::new("Label", vec![BuilderParam::new(
                    "identifier",
                    ParamType::Str,
                )]))
                .builder(BuilderSpec::new("Label", vec![BuilderParam::new(
                    "identifier",
                    ParamType::Token,
                )])),
        )
        .build();
    let quoter = Quoter::new(&registry);

    let simple = SyntaxNode::new("Label").with_attribute("Identifier", identifier_token("x"));
    assert_eq!(quoter.quote_node(&simple).expect("quotes").to_string(), "f:Label(\"x\")");

    let spaced = SyntaxNode::new("Label").with_attribute(
        "Identifier",
        identifier_token("x").with_leading([crate::syntax::SyntaxTrivia::new(
            "WhitespaceTrivia",
            "\t",
        )]),
    );
    let call = quoter.quote_node(&spaced).expect("quotes");
    assert_eq!(
        call.to_string(),
        "f:Label(f:Identifier(f:TriviaList(f:Whitespace(\"\\t\")), \"x\", \
         f:TriviaList()))",
    );
    let replayed = Replayer::new(&registry).replay_node(&call).expect("replays");
    assert_eq!(replayed.to_full_string(), "\tx");
}

/// Verifies that a required parameter without a value is reported.
#[test]
fn missing_required_value_is_reported() {
    let tree = node("ExpressionStatement", vec![]);
    let err = quoter().quote_node(&tree).expect_err("expression is required");
    match err {
        QuoteError::MissingArgument { builder, parameter } => {
            assert_eq!(builder, "ExpressionStatement");
            assert_eq!(parameter, "expression");
        },
        other => panic!("unexpected error: {other}"),
    }
}

/// Verifies that a leftover value with no matching modifier is reported.
#[test]
fn leftover_without_modifier_is_reported() {
    let registry = KindRegistry::builder()
        .node_type(
            NodeType::new("Marker")
                .kind("LeftMarker")
                .kind("RightMarker")
                .with_kind_selector()
                .builder(BuilderSpec::new("Marker", vec![])),
        )
        .build();
    let tree = SyntaxNode::new("RightMarker");
    let err = Quoter::new(&registry).quote_node(&tree).expect_err("no modifier");
    match err {
        QuoteError::UnsupportedModifier { node_type, modifier } => {
            assert_eq!(node_type, "Marker");
            assert_eq!(modifier, "Kind");
        },
        other => panic!("unexpected error: {other}"),
    }
}

/// Verifies that kinds no node type covers are unsupported.
#[test]
fn unknown_node_kind_is_unsupported() {
    let err = quoter()
        .quote_node(&SyntaxNode::new("LambdaExpression"))
        .expect_err("unknown kind");
    assert!(matches!(
        err,
        QuoteError::UnsupportedNodeKind { kind } if kind == SyntaxKind::from("LambdaExpression")
    ));
}

/// Verifies that removing any kept modifier changes the rendering.
#[test]
fn kept_modifiers_are_minimal() {
    let mut tree = expression_statement(addition(true));
    tree.set_attribute(
        "SemicolonToken",
        token("SemicolonToken").with_trailing([comment("// done")]),
    );
    let call = quoter().quote_node(&tree).expect("quotes");
    let full = render(&call);
    assert_eq!(full, tree.to_full_string());
    assert!(!call.modifier_calls.is_empty());
    for index in 0..call.modifier_calls.len() {
        let mut reduced = call.clone();
        reduced.modifier_calls.remove(index);
        assert_ne!(render(&reduced), full, "modifier {index} is redundant");
    }
}

/// Verifies that re-quoting a replayed tree removes nothing further and
/// yields the same call tree.
#[test]
fn elimination_is_idempotent_and_deterministic() {
    let tree = expression_statement(addition(true));
    let first = quoter().quote_node(&tree).expect("quotes");
    let replayed = Replayer::new(registry()).replay_node(&first).expect("replays");
    let second = quoter().quote_node(&replayed).expect("quotes");
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(
        first.to_string(),
        quoter().quote_node(&tree).expect("quotes").to_string(),
    );
}

/// Verifies that under default formatting, modifiers are compared after
/// normalization, so whitespace-only differences are dropped while comments
/// are kept.
#[test]
fn default_formatting_compares_normalized_renderings() {
    let normalizer = StripWhitespace;
    let quoter = quoter_with(QuoterOptions {
        use_default_formatting: true,
        ..QuoterOptions::default()
    })
    .with_normalizer(&normalizer);

    let call = quoter.quote_node(&addition(true)).expect("quotes");
    assert!(call.modifier_calls.is_empty(), "{call}");

    let mut commented = addition(false);
    commented.set_attribute(
        "OperatorToken",
        token("PlusToken").with_trailing([comment("/* plus */")]),
    );
    let call = quoter.quote_node(&commented).expect("quotes");
    assert_eq!(call.modifier_calls.len(), 1, "{call}");
    assert_eq!(render(&call), "a+/* plus */1");
}
