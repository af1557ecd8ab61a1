//! Token tables shared by the lexer, the parser and the kind registry.

/// Punctuation, longest text first so the lexer can take the first match.
pub(crate) const PUNCTUATION: &[(&str, &str)] = &[
    ("||", "BarBarToken"),
    ("&&", "AmpersandAmpersandToken"),
    ("==", "EqualsEqualsToken"),
    ("!=", "ExclamationEqualsToken"),
    ("<=", "LessThanEqualsToken"),
    (">=", "GreaterThanEqualsToken"),
    ("+=", "PlusEqualsToken"),
    ("-=", "MinusEqualsToken"),
    ("$\"", "InterpolatedStringStartToken"),
    ("(", "OpenParenToken"),
    (")", "CloseParenToken"),
    ("{", "OpenBraceToken"),
    ("}", "CloseBraceToken"),
    ("[", "OpenBracketToken"),
    ("]", "CloseBracketToken"),
    (";", "SemicolonToken"),
    (",", "CommaToken"),
    ("=", "EqualsToken"),
    ("<", "LessThanToken"),
    (">", "GreaterThanToken"),
    ("+", "PlusToken"),
    ("-", "MinusToken"),
    ("*", "AsteriskToken"),
    ("/", "SlashToken"),
    ("%", "PercentToken"),
    ("!", "ExclamationToken"),
];

pub(crate) const KEYWORDS: &[(&str, &str)] = &[
    ("fn", "FnKeyword"),
    ("pub", "PubKeyword"),
    ("let", "LetKeyword"),
    ("if", "IfKeyword"),
    ("else", "ElseKeyword"),
    ("return", "ReturnKeyword"),
    ("true", "TrueKeyword"),
    ("false", "FalseKeyword"),
    ("null", "NullKeyword"),
];

/// Keywords that are only keywords right after a directive's `#`.
pub(crate) const DIRECTIVE_KEYWORDS: &[(&str, &str, &str)] = &[
    ("region", "RegionKeyword", "RegionDirectiveTrivia"),
    ("endregion", "EndRegionKeyword", "EndRegionDirectiveTrivia"),
];

/// Fixed-text tokens that are neither punctuation nor keywords.
pub(crate) const OTHER_FIXED_TOKENS: &[(&str, &str)] = &[
    ("\"", "InterpolatedStringEndToken"),
    ("#", "HashToken"),
    ("", "EndOfDirectiveToken"),
    ("", "EndOfFileToken"),
];

/// An operator token together with the expression kind it forms.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OperatorKind {
    pub token: &'static str,
    pub expression: &'static str,
}

const fn op(token: &'static str, expression: &'static str) -> OperatorKind {
    OperatorKind { token, expression }
}

/// Right-associative assignment operators.
pub(crate) const ASSIGNMENT_OPERATORS: &[OperatorKind] = &[
    op("EqualsToken", "SimpleAssignmentExpression"),
    op("PlusEqualsToken", "AddAssignmentExpression"),
    op("MinusEqualsToken", "SubtractAssignmentExpression"),
];

/// Left-associative binary operators with their precedence; higher binds
/// tighter.
pub(crate) const BINARY_OPERATORS: &[(u8, OperatorKind)] = &[
    (1, op("BarBarToken", "LogicalOrExpression")),
    (2, op("AmpersandAmpersandToken", "LogicalAndExpression")),
    (3, op("EqualsEqualsToken", "EqualsExpression")),
    (3, op("ExclamationEqualsToken", "NotEqualsExpression")),
    (4, op("LessThanToken", "LessThanExpression")),
    (4, op("GreaterThanToken", "GreaterThanExpression")),
    (4, op("LessThanEqualsToken", "LessThanOrEqualExpression")),
    (4, op("GreaterThanEqualsToken", "GreaterThanOrEqualExpression")),
    (5, op("PlusToken", "AddExpression")),
    (5, op("MinusToken", "SubtractExpression")),
    (6, op("AsteriskToken", "MultiplyExpression")),
    (6, op("SlashToken", "DivideExpression")),
    (6, op("PercentToken", "ModuloExpression")),
];

pub(crate) const PREFIX_OPERATORS: &[OperatorKind] = &[
    op("MinusToken", "UnaryMinusExpression"),
    op("ExclamationToken", "LogicalNotExpression"),
];

/// The fixed text of a punctuation or keyword token kind.
pub(crate) fn fixed_text(kind: &str) -> Option<&'static str> {
    PUNCTUATION
        .iter()
        .chain(KEYWORDS)
        .chain(OTHER_FIXED_TOKENS)
        .find(|(_, candidate)| *candidate == kind)
        .map(|(text, _)| *text)
}
