//! Tests for builder overload resolution.

use crate::kind_registry::BuilderParam;
use crate::kind_registry::BuilderSpec;
use crate::kind_registry::NodeType;
use crate::kind_registry::ParamType;
use crate::quoter::resolve_builder;
use crate::syntax::ListShape;
use crate::syntax::SyntaxKind;
use crate::tests::fixtures::registry;
use crate::QuoteError;

fn resolve(type_name: &str, kind: &str) -> &'static BuilderSpec {
    let node_type = registry()
        .node_type(type_name)
        .unwrap_or_else(|| panic!("no node type `{type_name}`"));
    resolve_builder(node_type, &SyntaxKind::from(kind)).expect("resolves")
}

fn param_names(builder: &BuilderSpec) -> Vec<&str> {
    builder.params.iter().map(|param| param.name.as_str()).collect()
}

/// Verifies that simple-name-like types resolve to the builder taking a
/// plain string first, even though a token overload exists.
#[test]
fn prefer_string_name_picks_string_overload() {
    let builder = resolve("IdentifierName", "IdentifierName");
    assert_eq!(param_names(builder), vec!["name"]);
    assert_eq!(builder.params[0].ty, ParamType::Str);
}

/// Verifies that literal-like types use the one-parameter form for
/// kind-only literals and the two-parameter form otherwise.
#[test]
fn literal_hint_selects_arity_by_kind() {
    let kind_only = resolve("LiteralExpression", "TrueLiteralExpression");
    assert_eq!(param_names(kind_only), vec!["kind"]);

    let valued = resolve("LiteralExpression", "NumericLiteralExpression");
    assert_eq!(param_names(valued), vec!["kind", "token"]);
}

/// Verifies that the candidate with the fewest required parameters wins.
#[test]
fn fewest_required_parameters_win() {
    let builder = resolve("BinaryExpression", "AddExpression");
    assert_eq!(param_names(builder), vec!["kind", "left", "right"]);

    let builder = resolve("ReturnStatement", "ReturnStatement");
    assert_eq!(param_names(builder), vec!["expression"]);
    assert!(builder.params[0].optional);
}

/// Verifies that a variadic candidate beats an equally minimal candidate
/// whose sole parameter is optional.
#[test]
fn ties_prefer_variadic_then_sole_optional() {
    let node_type = NodeType::new("Tuple")
        .kind("Tuple")
        .builder(BuilderSpec::new("Tuple", vec![
            BuilderParam::new("first", ParamType::Node).optional(),
        ]))
        .builder(BuilderSpec::new("Tuple", vec![
            BuilderParam::new("items", ParamType::List(ListShape::Nodes))
                .variadic(),
        ]));
    let builder =
        resolve_builder(&node_type, &SyntaxKind::from("Tuple")).expect("resolves");
    assert_eq!(param_names(builder), vec!["items"]);

    let node_type = NodeType::new("Pair")
        .kind("Pair")
        .builder(BuilderSpec::new("Pair", vec![]))
        .builder(BuilderSpec::new("Pair", vec![
            BuilderParam::new("first", ParamType::Node).optional(),
        ]));
    let builder =
        resolve_builder(&node_type, &SyntaxKind::from("Pair")).expect("resolves");
    assert_eq!(param_names(builder), vec!["first"]);
}

/// Verifies that the final tie-break follows lexical builder order rather
/// than declaration order.
#[test]
fn tie_break_is_independent_of_declaration_order() {
    let forward = NodeType::new("Named")
        .kind("Named")
        .builder(BuilderSpec::new("Zeta", vec![]))
        .builder(BuilderSpec::new("Alpha", vec![]));
    let backward = NodeType::new("Named")
        .kind("Named")
        .builder(BuilderSpec::new("Alpha", vec![]))
        .builder(BuilderSpec::new("Zeta", vec![]));
    let kind = SyntaxKind::from("Named");

    assert_eq!(resolve_builder(&forward, &kind).expect("resolves").name, "Alpha");
    assert_eq!(resolve_builder(&backward, &kind).expect("resolves").name, "Alpha");
}

/// Verifies that a node type without builders is reported as unsupported.
#[test]
fn no_candidates_is_unsupported() {
    let node_type = NodeType::new("Opaque").kind("Opaque");
    let err = resolve_builder(&node_type, &SyntaxKind::from("Opaque"))
        .expect_err("no builders");
    assert!(matches!(
        err,
        QuoteError::UnsupportedNodeKind { kind } if kind == "Opaque"
    ));
}
