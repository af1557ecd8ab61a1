//! Tests for registry lookups, instantiation and consistency checks.

use crate::kind_registry::AttributeSchema;
use crate::kind_registry::BuilderParam;
use crate::kind_registry::BuilderSpec;
use crate::kind_registry::KindRegistry;
use crate::kind_registry::NodeType;
use crate::kind_registry::ParamType;
use crate::kind_registry::RegistryConsistencyError;
use crate::kind_registry::TriviaCategory;
use crate::syntax::AttributeValue;
use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxTrivia;
use crate::syntax::TokenValueType;
use crate::tests::fixtures::registry;

/// Verifies that the shared fixture registry passes every consistency check.
#[test]
fn fixture_registry_is_consistent() {
    assert_eq!(registry().check_consistency(), vec![]);
}

/// Verifies that instantiation fills attributes in schema order with their
/// defaults.
#[test]
fn instantiate_fills_defaults_in_schema_order() {
    let node = registry()
        .instantiate(&SyntaxKind::from("Block"))
        .expect("Block is registered");
    let names: Vec<&str> =
        node.attributes.iter().map(|attr| attr.name.as_str()).collect();
    assert_eq!(names, ["OpenBraceToken", "Statements", "CloseBraceToken"]);
    assert_eq!(node.token("OpenBraceToken").map(|t| t.text.as_str()), Some("{"));
    assert_eq!(node.list("Statements"), Some(&SyntaxList::Nodes(vec![])));
    assert_eq!(node.to_full_string(), "{}");

    let directive = registry()
        .instantiate(&SyntaxKind::from("RegionDirectiveTrivia"))
        .expect("directive is registered");
    assert_eq!(directive.bool("IsActive"), Some(false));

    let name = registry()
        .instantiate(&SyntaxKind::from("IdentifierName"))
        .expect("IdentifierName is registered");
    assert!(name.attribute("Identifier").is_some_and(AttributeValue::is_absent));
    assert_eq!(name.str("Span"), Some(""));
}

/// Verifies that per-kind default tokens override attribute defaults.
#[test]
fn instantiate_uses_kind_specific_tokens() {
    let multiply = registry()
        .instantiate(&SyntaxKind::from("MultiplyExpression"))
        .expect("registered");
    assert_eq!(multiply.token("OperatorToken").map(|t| t.text.as_str()), Some("*"));
    assert!(registry().instantiate(&SyntaxKind::from("Nope")).is_none());
}

/// Verifies that a kind-specific token wins over the attribute default and
/// that other kinds fall back to the attribute's own default.
#[test]
fn default_token_prefers_kind_override() {
    let node_type = NodeType::new("LiteralExpression")
        .kind_with_tokens("TrueLiteralExpression", &[("Token", "TrueKeyword")])
        .kind("NullLiteralExpression");
    let attribute = AttributeSchema::token_with_default("Token", "NullKeyword");

    let overridden =
        node_type.default_token(&SyntaxKind::from("TrueLiteralExpression"), &attribute);
    assert_eq!(overridden.map(SyntaxKind::as_str), Some("TrueKeyword"));

    let fallback =
        node_type.default_token(&SyntaxKind::from("NullLiteralExpression"), &attribute);
    assert_eq!(fallback.map(SyntaxKind::as_str), Some("NullKeyword"));

    let bare = AttributeSchema::token("Token");
    assert_eq!(
        node_type.default_token(&SyntaxKind::from("NullLiteralExpression"), &bare),
        None,
    );
}

/// Verifies the token kind lookups.
#[test]
fn token_lookups() {
    let registry = registry();
    assert_eq!(
        registry.literal_kind(TokenValueType::Float).map(SyntaxKind::as_str),
        Some("NumericLiteralToken"),
    );
    assert_eq!(
        registry.identifier_kind().map(SyntaxKind::as_str),
        Some("IdentifierToken"),
    );
    assert_eq!(registry.bad_kind().map(SyntaxKind::as_str), Some("BadToken"));
    // Text tokens whose builder takes a kind are not resolved by name.
    assert_eq!(registry.text_builder_kind("Token"), None);
    assert_eq!(registry.make_token(&SyntaxKind::from("CommaToken")).text, ",");
}

/// Verifies that trivia kinds resolve by the longest matching prefix.
#[test]
fn trivia_kind_prefers_longest_prefix() {
    let registry = KindRegistry::builder()
        .trivia("CommentTrivia", TriviaCategory::Comment, None)
        .trivia("LineCommentTrivia", TriviaCategory::Comment, Some("/"))
        .trivia("DocCommentTrivia", TriviaCategory::Comment, Some("///"))
        .build();
    let kind_of = |text| {
        registry
            .trivia_kind_for(TriviaCategory::Comment, text)
            .map(SyntaxKind::as_str)
    };
    assert_eq!(kind_of("/// doc"), Some("DocCommentTrivia"));
    assert_eq!(kind_of("// line"), Some("LineCommentTrivia"));
    assert_eq!(kind_of("# other"), Some("CommentTrivia"));
    assert_eq!(registry.trivia_kind_for(TriviaCategory::Whitespace, " "), None);
}

/// Verifies that well-known trivia match on both kind and text.
#[test]
fn well_known_trivia_match_kind_and_text() {
    let registry = registry();
    let found = registry
        .find_well_known(&SyntaxTrivia::new("EndOfLineTrivia", "\n"))
        .map(|well_known| well_known.name.as_str());
    assert_eq!(found, Some("LineFeed"));
    assert!(
        registry
            .find_well_known(&SyntaxTrivia::new("EndOfLineTrivia", " "))
            .is_none()
    );
    assert!(
        registry
            .find_well_known(&SyntaxTrivia::new("WhitespaceTrivia", "  "))
            .is_none()
    );
}

/// Verifies that each kind of inconsistent declaration is reported.
#[test]
fn inconsistent_declarations_are_reported() {
    let registry = KindRegistry::builder()
        .token("CommaToken", ",")
        .node_type(
            NodeType::new("Orphan")
                .builder(BuilderSpec::new("Orphan", vec![])),
        )
        .node_type(
            NodeType::new("Pair")
                .kind("Pair")
                .attribute(AttributeSchema::node("First"))
                .attribute(AttributeSchema::node("Second"))
                .attribute(AttributeSchema::token_with_default(
                    "Separator",
                    "ColonToken",
                ))
                .builder(BuilderSpec::new("Pair", vec![BuilderParam::new(
                    "first",
                    ParamType::Node,
                )]))
                .builder(BuilderSpec::new("Pair", vec![
                    BuilderParam::new("second", ParamType::Node).optional(),
                ])),
        )
        .node_type(
            NodeType::new("Name")
                .kind("Name")
                .attribute(AttributeSchema::token("Identifier"))
                .builder(BuilderSpec::new("Name", vec![BuilderParam::new(
                    "name",
                    ParamType::Str,
                )])),
        )
        .build();

    assert_eq!(registry.check_consistency(), vec![
        RegistryConsistencyError::NodeTypeWithoutKinds {
            node_type: "Orphan".to_string(),
        },
        RegistryConsistencyError::UnknownTokenKind {
            node_type: "Pair".to_string(),
            attribute: "Separator".to_string(),
            kind: SyntaxKind::from("ColonToken"),
        },
        RegistryConsistencyError::AmbiguousOverloads {
            builder: "Pair".to_string(),
        },
        RegistryConsistencyError::MissingTokenTwin {
            builder: "Name".to_string(),
        },
    ]);
}
