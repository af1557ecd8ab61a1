//! The kind registry of the script language.

use crate::script_tokens::ASSIGNMENT_OPERATORS;
use crate::script_tokens::BINARY_OPERATORS;
use crate::script_tokens::DIRECTIVE_KEYWORDS;
use crate::script_tokens::KEYWORDS;
use crate::script_tokens::OTHER_FIXED_TOKENS;
use crate::script_tokens::OperatorKind;
use crate::script_tokens::PREFIX_OPERATORS;
use crate::script_tokens::PUNCTUATION;
use libquote::kind_registry::AttributeSchema;
use libquote::kind_registry::BuilderParam;
use libquote::kind_registry::BuilderSpec;
use libquote::kind_registry::KindRegistryBuilder;
use libquote::kind_registry::NodeType;
use libquote::kind_registry::ParamType;
use libquote::kind_registry::ResolutionHint;
use libquote::kind_registry::TriviaCategory;
use libquote::syntax::ListShape;
use libquote::syntax::SyntaxKind;
use libquote::syntax::TokenValueType;
use libquote::KindRegistry;
use std::sync::OnceLock;

/// The script registry, built on first use and shared read-only afterwards.
pub fn script_registry() -> &'static KindRegistry {
    static REGISTRY: OnceLock<KindRegistry> = OnceLock::new();
    REGISTRY.get_or_init(build_script_registry)
}

fn param(name: &str, ty: ParamType) -> BuilderParam {
    BuilderParam::new(name, ty)
}

fn builder(name: &str, params: Vec<BuilderParam>) -> BuilderSpec {
    BuilderSpec::new(name, params)
}

/// Every node carries its source span and whether it contains parse
/// diagnostics. Neither affects rendering, so neither is quoted.
fn with_diagnostics(node_type: NodeType) -> NodeType {
    node_type
        .attribute(AttributeSchema::string("Span").cosmetic())
        .attribute(AttributeSchema::bool("ContainsDiagnostics").cosmetic())
}

fn with_operator_kinds(
    mut node_type: NodeType,
    operators: impl IntoIterator<Item = OperatorKind>,
) -> NodeType {
    for operator in operators {
        node_type = node_type
            .kind_with_tokens(operator.expression, &[("OperatorToken", operator.token)]);
    }
    node_type
}

/// Binary-shaped types: `(kind, left, right)` plus the full form taking the
/// operator token.
fn binary_node_type(name: &str, operators: Vec<OperatorKind>) -> NodeType {
    with_diagnostics(
        with_operator_kinds(NodeType::new(name), operators)
            .attribute(AttributeSchema::node("Left"))
            .attribute(AttributeSchema::token("OperatorToken"))
            .attribute(AttributeSchema::node("Right"))
            .with_kind_selector()
            .builder(builder(name, vec![
                param("kind", ParamType::Kind),
                param("left", ParamType::Node),
                param("right", ParamType::Node),
            ]))
            .builder(builder(name, vec![
                param("kind", ParamType::Kind),
                param("left", ParamType::Node),
                param("operatorToken", ParamType::Token),
                param("right", ParamType::Node),
            ])),
    )
}

fn build_script_registry() -> KindRegistry {
    let mut registry = KindRegistry::builder();
    for (text, kind) in PUNCTUATION.iter().chain(KEYWORDS).chain(OTHER_FIXED_TOKENS) {
        registry = registry.token(kind, text);
    }
    for (text, kind, _) in DIRECTIVE_KEYWORDS {
        registry = registry.token(kind, text);
    }
    registry = registry
        .identifier_token("IdentifierToken")
        .literal_token("NumericLiteralToken", &[
            TokenValueType::Int,
            TokenValueType::Float,
        ])
        .literal_token("StringLiteralToken", &[TokenValueType::Str])
        .text_token("InterpolatedStringTextToken", "Token", true)
        .bad_token("BadToken")
        .trivia("WhitespaceTrivia", TriviaCategory::Whitespace, None)
        .trivia("EndOfLineTrivia", TriviaCategory::EndOfLine, None)
        .trivia("SingleLineCommentTrivia", TriviaCategory::Comment, Some("//"))
        .trivia("MultiLineCommentTrivia", TriviaCategory::Comment, Some("/*"))
        .trivia(
            "DocumentationCommentTrivia",
            TriviaCategory::DocumentationComment,
            None,
        )
        .trivia(
            "PreprocessingMessageTrivia",
            TriviaCategory::PreprocessingMessage,
            None,
        )
        .trivia("RegionDirectiveTrivia", TriviaCategory::Structured, None)
        .trivia("EndRegionDirectiveTrivia", TriviaCategory::Structured, None)
        .trivia("SkippedTokensTrivia", TriviaCategory::Structured, None)
        .well_known("Space", "WhitespaceTrivia", " ")
        .well_known("Tab", "WhitespaceTrivia", "\t")
        .well_known("LineFeed", "EndOfLineTrivia", "\n")
        .well_known("CarriageReturnLineFeed", "EndOfLineTrivia", "\r\n");

    let registry = register_statements(registry);
    let registry = register_expressions(registry);
    register_structured_trivia(registry).build()
}

fn register_statements(registry: KindRegistryBuilder) -> KindRegistryBuilder {
    registry
        .node_type(with_diagnostics(
            NodeType::new("CompilationUnit")
                .kind("CompilationUnit")
                .attribute(AttributeSchema::list("Members", ListShape::Nodes, "Statement"))
                .attribute(AttributeSchema::token_with_default(
                    "EndOfFileToken",
                    "EndOfFileToken",
                ))
                .builder(builder("CompilationUnit", vec![])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("FunctionDeclaration")
                .kind("FunctionDeclaration")
                .attribute(AttributeSchema::token_list("Modifiers"))
                .attribute(AttributeSchema::token_with_default("FnKeyword", "FnKeyword"))
                .attribute(AttributeSchema::token("Identifier"))
                .attribute(AttributeSchema::node("ParameterList"))
                .attribute(AttributeSchema::node("Body"))
                .with_hint(ResolutionHint::PreferStringName)
                .builder(builder("FunctionDeclaration", vec![
                    param("name", ParamType::Str),
                    param("parameterList", ParamType::Node),
                    param("body", ParamType::Node),
                ]))
                .builder(builder("FunctionDeclaration", vec![
                    param("identifier", ParamType::Token),
                    param("parameterList", ParamType::Node),
                    param("body", ParamType::Node),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("ParameterList")
                .kind("ParameterList")
                .attribute(AttributeSchema::token_with_default(
                    "OpenParenToken",
                    "OpenParenToken",
                ))
                .attribute(AttributeSchema::list(
                    "Parameters",
                    ListShape::Separated,
                    "Parameter",
                ))
                .attribute(AttributeSchema::token_with_default(
                    "CloseParenToken",
                    "CloseParenToken",
                ))
                .builder(builder("ParameterList", vec![
                    param("parameters", ParamType::List(ListShape::Separated)).optional(),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("Parameter")
                .kind("Parameter")
                .attribute(AttributeSchema::token("Identifier"))
                .builder(builder("Parameter", vec![param(
                    "identifier",
                    ParamType::Token,
                )])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("VariableDeclaration")
                .kind("VariableDeclaration")
                .attribute(AttributeSchema::token_with_default("LetKeyword", "LetKeyword"))
                .attribute(AttributeSchema::token("Identifier"))
                .attribute(AttributeSchema::token_with_default("EqualsToken", "EqualsToken"))
                .attribute(AttributeSchema::node("Initializer"))
                .attribute(AttributeSchema::token_with_default(
                    "SemicolonToken",
                    "SemicolonToken",
                ))
                .builder(builder("VariableDeclaration", vec![
                    param("identifier", ParamType::Token),
                    param("initializer", ParamType::Node),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("IfStatement")
                .kind("IfStatement")
                .attribute(AttributeSchema::token_with_default("IfKeyword", "IfKeyword"))
                .attribute(AttributeSchema::token_with_default(
                    "OpenParenToken",
                    "OpenParenToken",
                ))
                .attribute(AttributeSchema::node("Condition"))
                .attribute(AttributeSchema::token_with_default(
                    "CloseParenToken",
                    "CloseParenToken",
                ))
                .attribute(AttributeSchema::node("Statement"))
                .attribute(AttributeSchema::node("Else"))
                .builder(builder("IfStatement", vec![
                    param("condition", ParamType::Node),
                    param("statement", ParamType::Node),
                    param("else", ParamType::Node).optional(),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("ElseClause")
                .kind("ElseClause")
                .attribute(AttributeSchema::token_with_default("ElseKeyword", "ElseKeyword"))
                .attribute(AttributeSchema::node("Statement"))
                .builder(builder("ElseClause", vec![param("statement", ParamType::Node)])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("ReturnStatement")
                .kind("ReturnStatement")
                .attribute(AttributeSchema::token_with_default(
                    "ReturnKeyword",
                    "ReturnKeyword",
                ))
                .attribute(AttributeSchema::node("Expression"))
                .attribute(AttributeSchema::token_with_default(
                    "SemicolonToken",
                    "SemicolonToken",
                ))
                .builder(builder("ReturnStatement", vec![
                    param("expression", ParamType::Node).optional(),
                ]))
                .builder(builder("ReturnStatement", vec![
                    param("returnKeyword", ParamType::Token),
                    param("expression", ParamType::Node).optional(),
                    param("semicolonToken", ParamType::Token),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("Block")
                .kind("Block")
                .attribute(AttributeSchema::token_with_default(
                    "OpenBraceToken",
                    "OpenBraceToken",
                ))
                .attribute(AttributeSchema::list("Statements", ListShape::Nodes, "Statement"))
                .attribute(AttributeSchema::token_with_default(
                    "CloseBraceToken",
                    "CloseBraceToken",
                ))
                .builder(builder("Block", vec![
                    param("statements", ParamType::List(ListShape::Nodes)).variadic(),
                ]))
                .builder(builder("Block", vec![
                    param("openBraceToken", ParamType::Token),
                    param("statements", ParamType::List(ListShape::Nodes)),
                    param("closeBraceToken", ParamType::Token),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("ExpressionStatement")
                .kind("ExpressionStatement")
                .attribute(AttributeSchema::node("Expression"))
                .attribute(AttributeSchema::token_with_default(
                    "SemicolonToken",
                    "SemicolonToken",
                ))
                .builder(builder("ExpressionStatement", vec![param(
                    "expression",
                    ParamType::Node,
                )])),
        ))
}

fn register_expressions(registry: KindRegistryBuilder) -> KindRegistryBuilder {
    let literal_keywords = [
        ("TrueLiteralExpression", "TrueKeyword"),
        ("FalseLiteralExpression", "FalseKeyword"),
        ("NullLiteralExpression", "NullKeyword"),
    ];
    let mut literal = NodeType::new("LiteralExpression")
        .kind("NumericLiteralExpression")
        .kind("StringLiteralExpression");
    for (kind, keyword) in literal_keywords {
        literal = literal.kind_with_tokens(kind, &[("Token", keyword)]);
    }
    let literal = literal
        .attribute(AttributeSchema::token("Token"))
        .with_kind_selector()
        .with_hint(ResolutionHint::Literal {
            kind_only: literal_keywords
                .iter()
                .map(|(kind, _)| SyntaxKind::from(*kind))
                .collect(),
        })
        .builder(builder("LiteralExpression", vec![param("kind", ParamType::Kind)]))
        .builder(builder("LiteralExpression", vec![
            param("kind", ParamType::Kind),
            param("token", ParamType::Token),
        ]));

    registry
        .node_type(binary_node_type(
            "AssignmentExpression",
            ASSIGNMENT_OPERATORS.to_vec(),
        ))
        .node_type(binary_node_type(
            "BinaryExpression",
            BINARY_OPERATORS.iter().map(|(_, operator)| *operator).collect(),
        ))
        .node_type(with_diagnostics(
            with_operator_kinds(
                NodeType::new("PrefixUnaryExpression"),
                PREFIX_OPERATORS.iter().copied(),
            )
            .attribute(AttributeSchema::token("OperatorToken"))
            .attribute(AttributeSchema::node("Operand"))
            .with_kind_selector()
            .builder(builder("PrefixUnaryExpression", vec![
                param("kind", ParamType::Kind),
                param("operand", ParamType::Node),
            ]))
            .builder(builder("PrefixUnaryExpression", vec![
                param("kind", ParamType::Kind),
                param("operatorToken", ParamType::Token),
                param("operand", ParamType::Node),
            ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("InvocationExpression")
                .kind("InvocationExpression")
                .attribute(AttributeSchema::node("Expression"))
                .attribute(AttributeSchema::node("ArgumentList"))
                .builder(builder("InvocationExpression", vec![param(
                    "expression",
                    ParamType::Node,
                )]))
                .builder(builder("InvocationExpression", vec![
                    param("expression", ParamType::Node),
                    param("argumentList", ParamType::Node),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("ArgumentList")
                .kind("ArgumentList")
                .attribute(AttributeSchema::token_with_default(
                    "OpenParenToken",
                    "OpenParenToken",
                ))
                .attribute(AttributeSchema::list(
                    "Arguments",
                    ListShape::Separated,
                    "Expression",
                ))
                .attribute(AttributeSchema::token_with_default(
                    "CloseParenToken",
                    "CloseParenToken",
                ))
                .builder(builder("ArgumentList", vec![
                    param("arguments", ParamType::List(ListShape::Separated)).optional(),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("ParenthesizedExpression")
                .kind("ParenthesizedExpression")
                .attribute(AttributeSchema::token_with_default(
                    "OpenParenToken",
                    "OpenParenToken",
                ))
                .attribute(AttributeSchema::node("Expression"))
                .attribute(AttributeSchema::token_with_default(
                    "CloseParenToken",
                    "CloseParenToken",
                ))
                .builder(builder("ParenthesizedExpression", vec![param(
                    "expression",
                    ParamType::Node,
                )])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("ArrayExpression")
                .kind("ArrayExpression")
                .attribute(AttributeSchema::token_with_default(
                    "OpenBracketToken",
                    "OpenBracketToken",
                ))
                .attribute(AttributeSchema::list(
                    "Elements",
                    ListShape::Separated,
                    "Expression",
                ))
                .attribute(AttributeSchema::token_with_default(
                    "CloseBracketToken",
                    "CloseBracketToken",
                ))
                .builder(builder("ArrayExpression", vec![
                    param("elements", ParamType::List(ListShape::Separated)).optional(),
                ])),
        ))
        .node_type(with_diagnostics(literal))
        .node_type(with_diagnostics(
            NodeType::new("IdentifierName")
                .kind("IdentifierName")
                .attribute(AttributeSchema::token("Identifier"))
                .with_hint(ResolutionHint::PreferStringName)
                .builder(builder("IdentifierName", vec![param("name", ParamType::Str)]))
                .builder(builder("IdentifierName", vec![param(
                    "identifier",
                    ParamType::Token,
                )])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("InterpolatedStringExpression")
                .kind("InterpolatedStringExpression")
                .attribute(AttributeSchema::token_with_default(
                    "StringStartToken",
                    "InterpolatedStringStartToken",
                ))
                .attribute(AttributeSchema::list(
                    "Contents",
                    ListShape::Nodes,
                    "InterpolatedStringContent",
                ))
                .attribute(AttributeSchema::token_with_default(
                    "StringEndToken",
                    "InterpolatedStringEndToken",
                ))
                .builder(builder("InterpolatedStringExpression", vec![param(
                    "stringStartToken",
                    ParamType::Token,
                )]))
                .builder(builder("InterpolatedStringExpression", vec![
                    param("stringStartToken", ParamType::Token),
                    param("contents", ParamType::List(ListShape::Nodes)),
                    param("stringEndToken", ParamType::Token),
                ])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("InterpolatedStringText")
                .kind("InterpolatedStringText")
                .attribute(AttributeSchema::token("TextToken"))
                .builder(builder("InterpolatedStringText", vec![param(
                    "textToken",
                    ParamType::Token,
                )])),
        ))
        .node_type(with_diagnostics(
            NodeType::new("Interpolation")
                .kind("Interpolation")
                .attribute(AttributeSchema::token_with_default(
                    "OpenBraceToken",
                    "OpenBraceToken",
                ))
                .attribute(AttributeSchema::node("Expression"))
                .attribute(AttributeSchema::token_with_default(
                    "CloseBraceToken",
                    "CloseBraceToken",
                ))
                .builder(builder("Interpolation", vec![param(
                    "expression",
                    ParamType::Node,
                )])),
        ))
}

fn register_structured_trivia(registry: KindRegistryBuilder) -> KindRegistryBuilder {
    let mut registry = registry;
    for (_, keyword, kind) in DIRECTIVE_KEYWORDS {
        registry = registry.node_type(with_diagnostics(
            NodeType::new(kind)
                .kind(*kind)
                .attribute(AttributeSchema::token_with_default("HashToken", "HashToken"))
                .attribute(AttributeSchema::token_with_default(keyword, *keyword))
                .attribute(AttributeSchema::token_with_default(
                    "EndOfDirectiveToken",
                    "EndOfDirectiveToken",
                ))
                .attribute(AttributeSchema::bool("IsActive"))
                .builder(builder(kind, vec![param("isActive", ParamType::Bool)])),
        ));
    }
    registry.node_type(with_diagnostics(
        NodeType::new("SkippedTokensTrivia")
            .kind("SkippedTokensTrivia")
            .attribute(AttributeSchema::token_list("Tokens"))
            .builder(builder("SkippedTokensTrivia", vec![
                param("tokens", ParamType::List(ListShape::Tokens)).optional(),
            ])),
    ))
}
