//! Tests for lexing script source into tokens with trivia.

use crate::LexedToken;
use crate::ScriptLexer;
use crate::ScriptParseError;
use crate::ScriptParseErrorKind;
use libquote::syntax::TokenValue;

fn lex(source: &str) -> (Vec<LexedToken>, Vec<ScriptParseError>) {
    let mut lexer = ScriptLexer::new(source);
    let tokens: Vec<LexedToken> = lexer.by_ref().collect();
    (tokens, lexer.into_errors())
}

fn kinds(tokens: &[LexedToken]) -> Vec<&str> {
    tokens.iter().map(|lexed| lexed.token.kind.as_str()).collect()
}

fn rendered(tokens: &[LexedToken]) -> String {
    tokens.iter().map(|lexed| lexed.token.to_full_string()).collect()
}

/// Verifies that trailing trivia runs to the end of the line and everything
/// after belongs to the next token.
#[test]
fn trailing_trivia_ends_at_line_break() {
    let source = "let x = 1; // one\n// two\nx;";
    let (tokens, errors) = lex(source);
    assert!(errors.is_empty());
    assert_eq!(kinds(&tokens), vec![
        "LetKeyword",
        "IdentifierToken",
        "EqualsToken",
        "NumericLiteralToken",
        "SemicolonToken",
        "IdentifierToken",
        "SemicolonToken",
        "EndOfFileToken",
    ]);

    let semicolon = &tokens[4].token;
    let trailing: Vec<&str> = semicolon.trailing.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(trailing, vec![
        "WhitespaceTrivia",
        "SingleLineCommentTrivia",
        "EndOfLineTrivia",
    ]);

    let second_x = &tokens[5].token;
    let leading: Vec<&str> = second_x.leading.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(leading, vec!["// two", "\n"]);
    assert_eq!(tokens[5].span.start, 25);
    assert_eq!(rendered(&tokens), source);
}

/// Verifies that numbers carry their values and out-of-range numbers are
/// reported without one.
#[test]
fn numbers_carry_values() {
    let (tokens, errors) = lex("0x2A 1.5e3 12 99999999999999999999");
    let values: Vec<Option<TokenValue>> =
        tokens.iter().map(|lexed| lexed.token.value.clone()).collect();
    assert_eq!(values, vec![
        Some(TokenValue::Int(42)),
        Some(TokenValue::Float(1500.0)),
        Some(TokenValue::Int(12)),
        None,
        None,
    ]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), &ScriptParseErrorKind::InvalidNumber {
        text: "99999999999999999999".to_string(),
    });
}

/// Verifies that string escapes are decoded into the value while the text
/// stays as written.
#[test]
fn strings_decode_escapes() {
    let source = r#""a\"b\n""#;
    let (tokens, errors) = lex(source);
    assert!(errors.is_empty());
    assert_eq!(tokens[0].token.text, source);
    assert_eq!(tokens[0].token.value, Some(TokenValue::Str("a\"b\n".to_string())));
}

/// Verifies that a string without its closing quote stops at the end of the
/// line.
#[test]
fn unterminated_string_stops_at_line_break() {
    let source = "\"abc\nx";
    let (tokens, errors) = lex(source);
    assert_eq!(kinds(&tokens), vec![
        "StringLiteralToken",
        "IdentifierToken",
        "EndOfFileToken",
    ]);
    assert_eq!(tokens[0].token.text, "\"abc");
    assert_eq!(errors[0].kind(), &ScriptParseErrorKind::UnterminatedString);
    assert_eq!(rendered(&tokens), source);
}

/// Verifies that interpolated strings split into text runs and
/// interpolations, with doubled braces kept as text.
#[test]
fn interpolated_strings_alternate_text_and_code() {
    let source = r#"$"a {b} {{c}}""#;
    let (tokens, errors) = lex(source);
    assert!(errors.is_empty());
    assert_eq!(kinds(&tokens), vec![
        "InterpolatedStringStartToken",
        "InterpolatedStringTextToken",
        "OpenBraceToken",
        "IdentifierToken",
        "CloseBraceToken",
        "InterpolatedStringTextToken",
        "InterpolatedStringEndToken",
        "EndOfFileToken",
    ]);
    assert_eq!(tokens[1].token.text, "a ");
    assert_eq!(tokens[5].token.text, " {{c}}");
    assert_eq!(tokens[5].token.value, Some(TokenValue::Str(" {c}".to_string())));
    assert_eq!(rendered(&tokens), source);
}

/// Verifies that region directives at the start of a line become structured
/// leading trivia.
#[test]
fn directives_become_structured_trivia() {
    let source = "#region Setup\nx;\n#endregion\n";
    let (tokens, errors) = lex(source);
    assert!(errors.is_empty());
    assert_eq!(kinds(&tokens), vec![
        "IdentifierToken",
        "SemicolonToken",
        "EndOfFileToken",
    ]);

    let region = &tokens[0].token.leading[0];
    let structure = region.structure.as_deref().expect("structured trivia");
    assert_eq!(structure.kind, "RegionDirectiveTrivia");
    assert_eq!(structure.token("HashToken").map(|t| t.text.as_str()), Some("#"));
    assert_eq!(
        structure.token("RegionKeyword").map(|t| t.text.as_str()),
        Some("region"),
    );
    let end_of_directive = structure
        .token("EndOfDirectiveToken")
        .expect("end of directive");
    assert_eq!(end_of_directive.leading[0].kind, "PreprocessingMessageTrivia");
    assert_eq!(end_of_directive.leading[0].text, "Setup");
    assert_eq!(end_of_directive.trailing[0].text, "\n");
    assert_eq!(structure.bool("IsActive"), Some(true));
    assert_eq!(region.text, "#region Setup\n");

    let end_region = &tokens[2].token.leading[0];
    assert_eq!(end_region.kind, "EndRegionDirectiveTrivia");
    assert_eq!(rendered(&tokens), source);
}

/// Verifies that `#` away from the start of a line is a bad token.
#[test]
fn hash_inside_a_line_is_a_bad_token() {
    let (tokens, errors) = lex("x #region");
    assert_eq!(kinds(&tokens), vec![
        "IdentifierToken",
        "BadToken",
        "IdentifierToken",
        "EndOfFileToken",
    ]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), &ScriptParseErrorKind::BadCharacter {
        character: '#',
    });
}

/// Verifies that an unterminated block comment runs to the end of input.
#[test]
fn unterminated_comment_runs_to_end() {
    let source = "x /* never closed";
    let (tokens, errors) = lex(source);
    assert_eq!(kinds(&tokens), vec!["IdentifierToken", "EndOfFileToken"]);
    let comment = &tokens[0].token.trailing[1];
    assert_eq!(comment.kind, "MultiLineCommentTrivia");
    assert_eq!(comment.text, "/* never closed");
    assert_eq!(errors[0].kind(), &ScriptParseErrorKind::UnterminatedComment);
}

/// Verifies that exactly three slashes start a documentation comment.
#[test]
fn documentation_comments_need_three_slashes() {
    let (tokens, _) = lex("/// docs\n//// not docs\nx");
    let leading: Vec<&str> = tokens[0]
        .token
        .leading
        .iter()
        .map(|trivia| trivia.kind.as_str())
        .collect();
    assert_eq!(leading, vec![
        "DocumentationCommentTrivia",
        "EndOfLineTrivia",
        "SingleLineCommentTrivia",
        "EndOfLineTrivia",
    ]);
}

/// Verifies that characters outside the language become bad tokens and
/// lexing carries on.
#[test]
fn unknown_characters_become_bad_tokens() {
    let source = "a @ é b";
    let (tokens, errors) = lex(source);
    assert_eq!(kinds(&tokens), vec![
        "IdentifierToken",
        "BadToken",
        "BadToken",
        "IdentifierToken",
        "EndOfFileToken",
    ]);
    assert_eq!(errors.len(), 2);
    assert_eq!(tokens[2].token.text, "é");
    assert_eq!(rendered(&tokens), source);
}
