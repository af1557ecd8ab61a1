//! Tests for parsing scripts into lossless trees.

use crate::parse_script;
use crate::ScriptParseErrorKind;
use libquote::syntax::SyntaxList;
use libquote::syntax::SyntaxNode;
use proptest::prelude::*;

pub(super) const PROGRAM: &str = "/// Adds.
pub fn add(a, b) {
    return a + b * 2;
}

let total = add(1, 0x2A); // sum
if (total >= 10 && !done) {
    log($\"total {total}\");
} else total -= 1;
let items = [1, 2.5, \"three\", null,];
";

fn members(unit: &SyntaxNode) -> &[SyntaxNode] {
    match unit.list("Members") {
        Some(SyntaxList::Nodes(nodes)) => nodes,
        other => panic!("expected member nodes, found {other:?}"),
    }
}

fn parse_one(source: &str) -> SyntaxNode {
    let result = parse_script(source);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    members(result.tree())[0].clone()
}

fn expression_of(statement: &SyntaxNode) -> &SyntaxNode {
    statement.node("Expression").expect("expression")
}

/// Verifies that a well-formed program parses without errors and renders
/// back to its exact text.
#[test]
fn program_renders_losslessly() {
    let result = parse_script(PROGRAM);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.tree().to_full_string(), PROGRAM);

    let kinds: Vec<&str> = members(result.tree())
        .iter()
        .map(|member| member.kind.as_str())
        .collect();
    assert_eq!(kinds, vec![
        "FunctionDeclaration",
        "VariableDeclaration",
        "IfStatement",
        "VariableDeclaration",
    ]);
}

/// Verifies that multiplication binds tighter than addition.
#[test]
fn precedence_orders_binary_operators() {
    let declaration = parse_one("let x = 1 + 2 * 3;");
    let initializer = declaration.node("Initializer").expect("initializer");
    assert_eq!(initializer.kind, "AddExpression");
    assert_eq!(
        initializer.node("Right").map(|right| right.kind.as_str()),
        Some("MultiplyExpression"),
    );
}

/// Verifies that binary operators of one level group to the left.
#[test]
fn binary_operators_group_left() {
    let statement = parse_one("a - b - c;");
    let expression = expression_of(&statement);
    assert_eq!(expression.kind, "SubtractExpression");
    assert_eq!(
        expression.node("Left").map(|left| left.kind.as_str()),
        Some("SubtractExpression"),
    );
}

/// Verifies that assignments group to the right.
#[test]
fn assignments_group_right() {
    let statement = parse_one("a = b += c;");
    let expression = expression_of(&statement);
    assert_eq!(expression.kind, "SimpleAssignmentExpression");
    assert_eq!(
        expression.node("Right").map(|right| right.kind.as_str()),
        Some("AddAssignmentExpression"),
    );
}

/// Verifies that prefix operators apply to a whole call chain.
#[test]
fn prefix_operators_wrap_calls() {
    let statement = parse_one("-f(x)(y);");
    let expression = expression_of(&statement);
    assert_eq!(expression.kind, "UnaryMinusExpression");
    let operand = expression.node("Operand").expect("operand");
    assert_eq!(operand.kind, "InvocationExpression");
    assert_eq!(expression_of(operand).kind, "InvocationExpression");
}

/// Verifies that each literal form gets its own expression kind.
#[test]
fn literals_get_their_kinds() {
    let result = parse_script("true; false; null; \"s\"; 1;");
    assert!(result.errors.is_empty());
    let kinds: Vec<&str> = members(result.tree())
        .iter()
        .map(|statement| expression_of(statement).kind.as_str())
        .collect();
    assert_eq!(kinds, vec![
        "TrueLiteralExpression",
        "FalseLiteralExpression",
        "NullLiteralExpression",
        "StringLiteralExpression",
        "NumericLiteralExpression",
    ]);
}

/// Verifies that an absent expression becomes a missing identifier and is
/// reported.
#[test]
fn absent_expression_becomes_missing_identifier() {
    let source = "let x = ;";
    let result = parse_script(source);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind(), &ScriptParseErrorKind::UnexpectedToken {
        expected: vec!["expression".to_string()],
        found: ";".to_string(),
    });

    let declaration = &members(result.tree())[0];
    let initializer = declaration.node("Initializer").expect("initializer");
    assert_eq!(initializer.kind, "IdentifierName");
    assert!(initializer.token("Identifier").is_some_and(|token| token.is_missing));
    assert_eq!(declaration.bool("ContainsDiagnostics"), Some(true));
    assert_eq!(declaration.str("Span"), Some("0..9"));
    assert_eq!(result.tree().to_full_string(), source);
}

/// Verifies that a statement cut off by the end of input gets a missing
/// semicolon.
#[test]
fn end_of_input_leaves_missing_semicolon() {
    let result = parse_script("x");
    let statement = &members(result.tree())[0];
    assert!(
        statement
            .token("SemicolonToken")
            .is_some_and(|token| token.is_missing)
    );
    assert_eq!(result.errors[0].kind(), &ScriptParseErrorKind::UnexpectedEof {
        expected: vec!["`;`".to_string()],
    });
}

/// Verifies that tokens which cannot start a statement are skipped into
/// trivia of the next token.
#[test]
fn stray_tokens_become_skipped_trivia() {
    let source = ") x;";
    let result = parse_script(source);
    assert_eq!(result.errors[0].kind(), &ScriptParseErrorKind::SkippedToken {
        text: ")".to_string(),
    });

    let statement = &members(result.tree())[0];
    let identifier = expression_of(statement)
        .token("Identifier")
        .expect("identifier");
    let skipped = identifier.leading[0]
        .structure
        .as_deref()
        .expect("skipped tokens");
    assert_eq!(skipped.kind, "SkippedTokensTrivia");
    match skipped.list("Tokens") {
        Some(SyntaxList::Tokens(tokens)) => {
            assert_eq!(tokens.len(), 1);
            assert_eq!(tokens[0].text, ")");
        },
        other => panic!("expected skipped tokens, found {other:?}"),
    }
    assert_eq!(result.tree().to_full_string(), source);
}

/// Verifies that nodes record their source span.
#[test]
fn nodes_record_spans() {
    let result = parse_script("let a = 1;\nlet b = 2;");
    let second = &members(result.tree())[1];
    assert_eq!(second.str("Span"), Some("11..21"));
    assert_eq!(second.bool("ContainsDiagnostics"), Some(false));
}

/// Verifies that runaway nesting is reported without losing text.
#[test]
fn deep_nesting_is_bounded() {
    let source = format!("{}1{};", "(".repeat(100), ")".repeat(100));
    let result = parse_script(&source);
    assert!(
        result
            .errors
            .iter()
            .any(|error| error.kind() == &ScriptParseErrorKind::MaximumDepthExceeded)
    );
    assert_eq!(result.tree().to_full_string(), source);
}

/// Verifies that an `else` binds to the nearest `if`.
#[test]
fn else_binds_to_nearest_if() {
    let statement = parse_one("if (a) if (b) x; else y;");
    assert!(statement.node("Else").is_none());
    let inner = statement.node("Statement").expect("inner if");
    assert_eq!(inner.kind, "IfStatement");
    assert!(inner.node("Else").is_some());
}

proptest! {
    /// Verifies that any input, however malformed, renders back unchanged.
    #[test]
    fn arbitrary_text_renders_losslessly(
        source in r#"[a-z0-9 (){};=+*/"$#\[\],.!<>\n\t-]{0,64}"#,
    ) {
        let result = parse_script(&source);
        prop_assert_eq!(result.tree().to_full_string(), source);
    }
}
