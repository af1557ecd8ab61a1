//! Tests for the standard script layout.

use crate::normalize_whitespace;
use crate::parse_script;
use crate::tests::script_parser_tests::PROGRAM;

fn normalized(source: &str) -> String {
    normalize_whitespace(parse_script(source).tree()).to_full_string()
}

/// Verifies that tokens are separated by single spaces and statements end
/// their line.
#[test]
fn statements_get_single_spaces() {
    assert_eq!(normalized("let   x=1+2 ;"), "let x = 1 + 2;\n");
}

/// Verifies indentation inside blocks and tight binding of calls, lists and
/// prefix operators.
#[test]
fn blocks_are_indented() {
    assert_eq!(
        normalized("fn f(a,b){return -a;}"),
        "fn f(a, b) {\n    return -a;\n}\n",
    );
    assert_eq!(
        normalized("if(a){x;}else{y;}"),
        "if (a) {\n    x;\n}\nelse {\n    y;\n}\n",
    );
}

/// Verifies that comments are kept and line comments still end their line.
#[test]
fn comments_are_kept() {
    assert_eq!(
        normalized("x;   // note\n\n\n/* lead */   y;"),
        "x; // note\n/* lead */ y;\n",
    );
}

/// Verifies that nothing is inserted inside interpolated string text.
#[test]
fn interpolated_strings_stay_tight() {
    assert_eq!(normalized("log( $\"a {b+1}\" );"), "log($\"a {b + 1}\");\n");
}

/// Verifies that directives are laid out on lines of their own.
#[test]
fn directives_get_their_own_lines() {
    assert_eq!(
        normalized("#region  Setup\n  x;\n#endregion"),
        "#region Setup\nx;\n#endregion\n",
    );
}

/// Verifies that normalizing twice changes nothing.
#[test]
fn normalizing_is_idempotent() {
    let once = normalize_whitespace(parse_script(PROGRAM).tree());
    let twice = normalize_whitespace(&once);
    assert_eq!(twice.to_full_string(), once.to_full_string());
    assert_eq!(normalized(&once.to_full_string()), once.to_full_string());
}
