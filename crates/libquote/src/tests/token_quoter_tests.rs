//! Tests for token quoting.

use crate::syntax::SyntaxToken;
use crate::syntax::TokenValue;
use crate::tests::fixtures::comment;
use crate::tests::fixtures::identifier_token;
use crate::tests::fixtures::number_token;
use crate::tests::fixtures::quoter;
use crate::tests::fixtures::quoter_with;
use crate::tests::fixtures::registry;
use crate::tests::fixtures::space;
use crate::tests::fixtures::token;
use crate::QuoterOptions;
use crate::Replayer;

fn quote(token: &SyntaxToken) -> String {
    quoter()
        .quote_token(token)
        .expect("quotes")
        .expect("tokens always quote to a call")
        .to_string()
}

/// Verifies that a literal whose text is the canonical rendering of its
/// value is quoted from the value alone.
#[test]
fn canonical_literal_omits_raw_text() {
    assert_eq!(quote(&number_token("42", 42)), "f:Literal(42)");
}

/// Verifies that a literal written non-canonically keeps its raw text.
#[test]
fn non_canonical_literal_keeps_raw_text() {
    assert_eq!(quote(&number_token("0x2A", 42)), "f:Literal(\"0x2A\", 42)");
}

/// Verifies that a literal with trivia uses the four-argument form, with an
/// explicit empty list for the side without trivia.
#[test]
fn literal_with_trivia_uses_full_form() {
    let token = number_token("42", 42).with_leading([space()]);
    assert_eq!(
        quote(&token),
        "f:Literal(f:TriviaList(f:Space()), \"42\", 42, f:TriviaList())",
    );
}

/// Verifies the identifier forms with and without trivia.
#[test]
fn identifiers_quote_text() {
    assert_eq!(quote(&identifier_token("x")), "f:Identifier(\"x\")");

    let token = identifier_token("x").with_trailing([comment("// c")]);
    assert_eq!(
        quote(&token),
        "f:Identifier(f:TriviaList(), \"x\", f:TriviaList(f:Comment(\"// c\")))",
    );
}

/// Verifies that fixed-text tokens are quoted by kind.
#[test]
fn fixed_tokens_quote_kind() {
    assert_eq!(quote(&token("PlusToken")), "f:Token(k:PlusToken)");

    let token = token("PlusToken").with_leading([space()]).with_trailing([space()]);
    assert_eq!(
        quote(&token),
        "f:Token(f:TriviaList(f:Space()), k:PlusToken, f:TriviaList(f:Space()))",
    );
}

/// Verifies that missing tokens are quoted by kind only.
#[test]
fn missing_tokens_quote_kind() {
    let token = SyntaxToken::missing("SemicolonToken");
    assert_eq!(quote(&token), "f:MissingToken(k:SemicolonToken)");
}

/// Verifies that bad tokens always carry both trivia lists.
#[test]
fn bad_tokens_carry_both_trivia_lists() {
    let token = SyntaxToken::new("BadToken", "@");
    assert_eq!(
        quote(&token),
        "f:BadToken(f:TriviaList(), \"@\", f:TriviaList())",
    );
}

/// Verifies that text-bearing tokens always use the full form with their
/// kind, raw text and value.
#[test]
fn text_tokens_use_full_form() {
    let token = SyntaxToken::new("TemplateTextToken", "abc")
        .with_value(TokenValue::Str("abc".to_string()));
    assert_eq!(
        quote(&token),
        "f:Token(f:TriviaList(), k:TemplateTextToken, \"abc\", \"abc\", \
         f:TriviaList())",
    );
}

/// Verifies that a token whose text differs from its kind's default text
/// keeps that text.
#[test]
fn unresolved_literal_keeps_its_text() {
    let token = SyntaxToken::new("NumericLiteralToken", "99999999999999999999");
    assert_eq!(
        quote(&token),
        "f:Token(f:TriviaList(), k:NumericLiteralToken, \"99999999999999999999\", \
         \"99999999999999999999\", f:TriviaList())",
    );
}

/// Verifies that trivia dropped under default formatting does not force the
/// trivia form.
#[test]
fn default_formatting_drops_whitespace_trivia() {
    let quoter = quoter_with(QuoterOptions {
        use_default_formatting: true,
        ..QuoterOptions::default()
    });
    let token = token("PlusToken").with_trailing([space()]);
    let call = quoter.quote_token(&token).expect("quotes").expect("call");
    assert_eq!(call.to_string(), "f:Token(k:PlusToken)");
}

/// Verifies that every token form replays to a token rendering the same
/// text.
#[test]
fn quoted_tokens_replay_to_same_text() {
    let tokens = vec![
        number_token("42", 42),
        number_token("0x2A", 42).with_trailing([space()]),
        identifier_token("name").with_leading([comment("/* a */"), space()]),
        token("StarToken"),
        SyntaxToken::missing("SemicolonToken").with_leading([space()]),
        SyntaxToken::new("BadToken", "@").with_trailing([space()]),
        SyntaxToken::new("TemplateTextToken", "x y")
            .with_value(TokenValue::Str("x y".to_string())),
        SyntaxToken::new("StringLiteralToken", "\"q\"")
            .with_value(TokenValue::Str("q".to_string())),
        SyntaxToken::new("NumericLiteralToken", "1.5")
            .with_value(TokenValue::Float(1.5)),
    ];
    let replayer = Replayer::new(registry());
    for token in tokens {
        let call = quoter().quote_token(&token).expect("quotes").expect("call");
        let replayed = replayer.replay(&call).expect("replays");
        assert_eq!(
            replayed.to_full_string(),
            token.to_full_string(),
            "{call}",
        );
    }
}
