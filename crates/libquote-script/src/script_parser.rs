//! Recursive-descent parser for the script language.
//!
//! The parser never fails. Required tokens that are absent become missing
//! tokens, and tokens that cannot start a statement are skipped into
//! `SkippedTokensTrivia` attached to the next token, so the tree always
//! renders back to exactly the input text.

use crate::script_lexer::LexedToken;
use crate::script_lexer::ScriptLexer;
use crate::script_registry::script_registry;
use crate::script_tokens::fixed_text;
use crate::script_tokens::ASSIGNMENT_OPERATORS;
use crate::script_tokens::BINARY_OPERATORS;
use crate::script_tokens::PREFIX_OPERATORS;
use crate::ByteSpan;
use crate::ParseResult;
use crate::ScriptParseError;
use crate::ScriptParseErrorKind;
use libquote::syntax::SyntaxKind;
use libquote::syntax::SyntaxList;
use libquote::syntax::SyntaxNode;
use libquote::syntax::SyntaxToken;
use libquote::syntax::SyntaxTrivia;
use libquote::KindRegistry;

/// Nesting deeper than this is reported and the offending token skipped.
const MAX_RECURSION_DEPTH: usize = 64;

/// Where a node began: the start of its first token and the number of
/// parser errors recorded at that point.
#[derive(Clone, Copy, Debug)]
struct NodeMarker {
    start: u32,
    error_count: usize,
}

pub struct ScriptParser {
    registry: &'static KindRegistry,

    /// Tokens not yet consumed, in reverse order so the next one is last.
    /// The end-of-file token is held apart and never popped.
    tokens: Vec<LexedToken>,
    end_of_file: LexedToken,

    /// End offset of the last consumed token.
    last_end: u32,

    /// Skipped tokens waiting to become leading trivia of the next consumed
    /// token, with the span they cover.
    skipped: Vec<SyntaxToken>,
    skipped_span: ByteSpan,

    lexer_errors: Vec<ScriptParseError>,
    errors: Vec<ScriptParseError>,
    recursion_depth: usize,
}

impl ScriptParser {
    pub fn new(source: &str) -> Self {
        let mut lexer = ScriptLexer::new(source);
        let mut tokens: Vec<LexedToken> = lexer.by_ref().collect();
        let lexer_errors = lexer.into_errors();
        let end_of_file = match tokens.pop() {
            Some(lexed) if lexed.token.kind.as_str() == "EndOfFileToken" => lexed,
            Some(lexed) => {
                tokens.push(lexed);
                LexedToken {
                    token: SyntaxToken::new("EndOfFileToken", ""),
                    span: ByteSpan::from_offsets(source.len(), source.len()),
                }
            },
            None => LexedToken {
                token: SyntaxToken::new("EndOfFileToken", ""),
                span: ByteSpan::default(),
            },
        };
        tokens.reverse();
        Self {
            registry: script_registry(),
            tokens,
            end_of_file,
            last_end: 0,
            skipped: Vec::new(),
            skipped_span: ByteSpan::default(),
            lexer_errors,
            errors: Vec::new(),
            recursion_depth: 0,
        }
    }

    /// Parses the whole input into a `CompilationUnit`.
    pub fn parse_compilation_unit(mut self) -> ParseResult<SyntaxNode> {
        let marker = self.marker();
        let mut members = Vec::new();
        while !self.at("EndOfFileToken") {
            if self.can_start_statement() {
                members.push(self.parse_statement());
            } else {
                self.skip_token();
            }
        }
        let end_of_file = self.bump();

        let mut unit = self.new_node("CompilationUnit");
        unit.set_attribute("Members", SyntaxList::Nodes(members));
        unit.set_attribute("EndOfFileToken", end_of_file);
        let unit = self.complete(marker, unit);

        let mut errors = self.lexer_errors;
        errors.append(&mut self.errors);
        errors.sort_by_key(|error| error.span().start);
        log::debug!("parsed compilation unit with {} error(s)", errors.len());
        ParseResult::recovered(unit, errors)
    }

    // =========================================================================
    // Token access
    // =========================================================================

    fn peek(&self) -> &LexedToken {
        self.tokens.last().unwrap_or(&self.end_of_file)
    }

    fn peek_kind(&self) -> &str {
        self.peek().token.kind.as_str()
    }

    fn at(&self, kind: &str) -> bool {
        self.peek_kind() == kind
    }

    fn take_token(&mut self) -> LexedToken {
        self.tokens
            .pop()
            .unwrap_or_else(|| self.end_of_file.clone())
    }

    /// Consumes the next token, prepending any skipped-token trivia to its
    /// leading trivia.
    fn bump(&mut self) -> SyntaxToken {
        let LexedToken { mut token, span } = self.take_token();
        self.last_end = span.end;
        if !self.skipped.is_empty() {
            let skipped = self.skipped_tokens_trivia();
            token.leading.insert(0, skipped);
        }
        token
    }

    /// Consumes a token of `kind`, or records an error and returns a missing
    /// token of that kind.
    fn expect(&mut self, kind: &str) -> SyntaxToken {
        if self.at(kind) {
            self.bump()
        } else {
            self.expected(vec![describe_kind(kind)]);
            SyntaxToken::missing(kind)
        }
    }

    fn expected(&mut self, expected: Vec<String>) {
        let found = self.peek();
        let at_eof = found.token.kind.as_str() == "EndOfFileToken";
        let found_text = if at_eof {
            "end of input".to_string()
        } else {
            format!("`{}`", found.token.text)
        };
        let message = format!("expected {}, found {found_text}", expected.join(" or "));
        let span = if at_eof {
            ByteSpan::new(found.span.start, found.span.start)
        } else {
            found.span
        };
        let kind = if at_eof {
            ScriptParseErrorKind::UnexpectedEof { expected }
        } else {
            ScriptParseErrorKind::UnexpectedToken {
                expected,
                found: found.token.text.clone(),
            }
        };
        self.errors.push(ScriptParseError::new(message, span, kind));
    }

    /// Moves the next token into the pending skipped tokens. Bad tokens were
    /// already reported by the lexer.
    fn skip_token(&mut self) {
        let LexedToken { token, span } = self.take_token();
        if token.kind.as_str() != "BadToken" {
            self.errors.push(ScriptParseError::new(
                format!("unexpected `{}`", token.text),
                span,
                ScriptParseErrorKind::SkippedToken {
                    text: token.text.clone(),
                },
            ));
        }
        self.skipped_span = if self.skipped.is_empty() {
            span
        } else {
            self.skipped_span.cover(span)
        };
        self.skipped.push(token);
    }

    fn skipped_tokens_trivia(&mut self) -> SyntaxTrivia {
        let tokens = std::mem::take(&mut self.skipped);
        let mut node = self.new_node("SkippedTokensTrivia");
        node.set_attribute("Tokens", SyntaxList::Tokens(tokens));
        node.set_attribute("Span", self.skipped_span.to_string());
        node.set_attribute("ContainsDiagnostics", true);
        SyntaxTrivia::structured(node)
    }

    // =========================================================================
    // Node construction
    // =========================================================================

    fn new_node(&self, kind: &str) -> SyntaxNode {
        let kind = SyntaxKind::from(kind);
        self.registry
            .instantiate(&kind)
            .unwrap_or_else(|| SyntaxNode::new(kind))
    }

    fn marker(&self) -> NodeMarker {
        NodeMarker {
            start: self.peek().span.start,
            error_count: self.errors.len(),
        }
    }

    /// Sets the diagnostic attributes of a node that started at `marker` and
    /// ends at the last consumed token.
    fn complete(&self, marker: NodeMarker, mut node: SyntaxNode) -> SyntaxNode {
        let span = ByteSpan::new(marker.start, self.last_end.max(marker.start));
        let contains_diagnostics = self.errors.len() > marker.error_count
            || self.lexer_errors.iter().any(|error| {
                span.start <= error.span().start && error.span().end <= span.end
            });
        node.set_attribute("Span", span.to_string());
        node.set_attribute("ContainsDiagnostics", contains_diagnostics);
        node
    }

    fn enter_recursion(&mut self) -> bool {
        self.recursion_depth += 1;
        if self.recursion_depth <= MAX_RECURSION_DEPTH {
            return true;
        }
        let span = self.peek().span;
        self.errors.push(ScriptParseError::new(
            format!("nesting deeper than {MAX_RECURSION_DEPTH} levels"),
            span,
            ScriptParseErrorKind::MaximumDepthExceeded,
        ));
        if !self.at("EndOfFileToken") {
            self.skip_token();
        }
        false
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// An `IdentifierName` holding a missing identifier, standing in for an
    /// absent expression.
    fn missing_expression(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let mut name = self.new_node("IdentifierName");
        name.set_attribute("Identifier", SyntaxToken::missing("IdentifierToken"));
        self.complete(marker, name)
    }

    fn missing_statement(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let expression = self.missing_expression();
        let mut statement = self.new_node("ExpressionStatement");
        statement.set_attribute("Expression", expression);
        statement.set_attribute("SemicolonToken", SyntaxToken::missing("SemicolonToken"));
        self.complete(marker, statement)
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn can_start_statement(&self) -> bool {
        matches!(
            self.peek_kind(),
            "FnKeyword"
                | "PubKeyword"
                | "LetKeyword"
                | "IfKeyword"
                | "ReturnKeyword"
                | "OpenBraceToken"
        ) || self.can_start_expression()
    }

    fn parse_statement(&mut self) -> SyntaxNode {
        if !self.enter_recursion() {
            self.exit_recursion();
            return self.missing_statement();
        }
        let statement = match self.peek_kind() {
            "FnKeyword" | "PubKeyword" => self.parse_function_declaration(),
            "LetKeyword" => self.parse_variable_declaration(),
            "IfKeyword" => self.parse_if_statement(),
            "ReturnKeyword" => self.parse_return_statement(),
            "OpenBraceToken" => self.parse_block(),
            _ => self.parse_expression_statement(),
        };
        self.exit_recursion();
        statement
    }

    /// A statement nested in `if` or `else`, or a missing one.
    fn parse_embedded_statement(&mut self) -> SyntaxNode {
        if self.can_start_statement() {
            self.parse_statement()
        } else {
            self.expected(vec!["statement".to_string()]);
            self.missing_statement()
        }
    }

    fn parse_function_declaration(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let mut modifiers = Vec::new();
        while self.at("PubKeyword") {
            modifiers.push(self.bump());
        }
        let fn_keyword = self.expect("FnKeyword");
        let identifier = self.expect("IdentifierToken");
        let parameter_list = self.parse_parameter_list();
        let body = self.parse_block();

        let mut function = self.new_node("FunctionDeclaration");
        function.set_attribute("Modifiers", SyntaxList::Tokens(modifiers));
        function.set_attribute("FnKeyword", fn_keyword);
        function.set_attribute("Identifier", identifier);
        function.set_attribute("ParameterList", parameter_list);
        function.set_attribute("Body", body);
        self.complete(marker, function)
    }

    fn parse_parameter_list(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let open = self.expect("OpenParenToken");
        let parameters = if open.is_missing {
            SyntaxList::Separated {
                nodes: Vec::new(),
                separators: Vec::new(),
            }
        } else {
            self.parse_separated_list(
                "CloseParenToken",
                |parser| parser.at("IdentifierToken"),
                Self::parse_parameter,
            )
        };
        let close = self.expect("CloseParenToken");

        let mut list = self.new_node("ParameterList");
        list.set_attribute("OpenParenToken", open);
        list.set_attribute("Parameters", parameters);
        list.set_attribute("CloseParenToken", close);
        self.complete(marker, list)
    }

    fn parse_parameter(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let identifier = self.expect("IdentifierToken");
        let mut parameter = self.new_node("Parameter");
        parameter.set_attribute("Identifier", identifier);
        self.complete(marker, parameter)
    }

    /// Parses comma-separated elements up to (not including) `close`. A
    /// trailing comma is kept.
    fn parse_separated_list(
        &mut self,
        close: &str,
        can_start_element: impl Fn(&Self) -> bool,
        parse_element: impl Fn(&mut Self) -> SyntaxNode,
    ) -> SyntaxList {
        let mut nodes = Vec::new();
        let mut separators = Vec::new();
        while !self.at(close) && can_start_element(self) {
            nodes.push(parse_element(self));
            if !self.at("CommaToken") {
                break;
            }
            separators.push(self.bump());
        }
        SyntaxList::Separated { nodes, separators }
    }

    fn parse_variable_declaration(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let let_keyword = self.bump();
        let identifier = self.expect("IdentifierToken");
        let equals = self.expect("EqualsToken");
        let initializer = self.parse_expression_or_missing();
        let semicolon = self.expect("SemicolonToken");

        let mut declaration = self.new_node("VariableDeclaration");
        declaration.set_attribute("LetKeyword", let_keyword);
        declaration.set_attribute("Identifier", identifier);
        declaration.set_attribute("EqualsToken", equals);
        declaration.set_attribute("Initializer", initializer);
        declaration.set_attribute("SemicolonToken", semicolon);
        self.complete(marker, declaration)
    }

    fn parse_if_statement(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let if_keyword = self.bump();
        let open = self.expect("OpenParenToken");
        let condition = self.parse_expression_or_missing();
        let close = self.expect("CloseParenToken");
        let statement = self.parse_embedded_statement();
        let else_clause = if self.at("ElseKeyword") {
            let else_marker = self.marker();
            let else_keyword = self.bump();
            let else_statement = self.parse_embedded_statement();
            let mut clause = self.new_node("ElseClause");
            clause.set_attribute("ElseKeyword", else_keyword);
            clause.set_attribute("Statement", else_statement);
            Some(self.complete(else_marker, clause))
        } else {
            None
        };

        let mut if_statement = self.new_node("IfStatement");
        if_statement.set_attribute("IfKeyword", if_keyword);
        if_statement.set_attribute("OpenParenToken", open);
        if_statement.set_attribute("Condition", condition);
        if_statement.set_attribute("CloseParenToken", close);
        if_statement.set_attribute("Statement", statement);
        if_statement.set_attribute("Else", else_clause);
        self.complete(marker, if_statement)
    }

    fn parse_return_statement(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let return_keyword = self.bump();
        let expression = if self.can_start_expression() {
            Some(self.parse_expression())
        } else {
            None
        };
        let semicolon = self.expect("SemicolonToken");

        let mut statement = self.new_node("ReturnStatement");
        statement.set_attribute("ReturnKeyword", return_keyword);
        statement.set_attribute("Expression", expression);
        statement.set_attribute("SemicolonToken", semicolon);
        self.complete(marker, statement)
    }

    fn parse_block(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let open = self.expect("OpenBraceToken");
        let mut statements = Vec::new();
        let close = if open.is_missing {
            SyntaxToken::missing("CloseBraceToken")
        } else {
            while !self.at("CloseBraceToken") && !self.at("EndOfFileToken") {
                if self.can_start_statement() {
                    statements.push(self.parse_statement());
                } else {
                    self.skip_token();
                }
            }
            self.expect("CloseBraceToken")
        };

        let mut block = self.new_node("Block");
        block.set_attribute("OpenBraceToken", open);
        block.set_attribute("Statements", SyntaxList::Nodes(statements));
        block.set_attribute("CloseBraceToken", close);
        self.complete(marker, block)
    }

    fn parse_expression_statement(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let expression = self.parse_expression();
        let semicolon = self.expect("SemicolonToken");

        let mut statement = self.new_node("ExpressionStatement");
        statement.set_attribute("Expression", expression);
        statement.set_attribute("SemicolonToken", semicolon);
        self.complete(marker, statement)
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn can_start_expression(&self) -> bool {
        matches!(
            self.peek_kind(),
            "IdentifierToken"
                | "NumericLiteralToken"
                | "StringLiteralToken"
                | "TrueKeyword"
                | "FalseKeyword"
                | "NullKeyword"
                | "OpenParenToken"
                | "OpenBracketToken"
                | "InterpolatedStringStartToken"
                | "MinusToken"
                | "ExclamationToken"
        )
    }

    fn parse_expression_or_missing(&mut self) -> SyntaxNode {
        if self.can_start_expression() {
            self.parse_expression()
        } else {
            self.expected(vec!["expression".to_string()]);
            self.missing_expression()
        }
    }

    fn parse_expression(&mut self) -> SyntaxNode {
        if !self.enter_recursion() {
            self.exit_recursion();
            return self.missing_expression();
        }
        let expression = self.parse_assignment();
        self.exit_recursion();
        expression
    }

    /// Assignment binds loosest and groups to the right: `a = b = c` is
    /// `a = (b = c)`.
    fn parse_assignment(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let left = self.parse_binary(1);
        let operator = ASSIGNMENT_OPERATORS
            .iter()
            .find(|operator| self.at(operator.token))
            .copied();
        let Some(operator) = operator else {
            return left;
        };
        let operator_token = self.bump();
        let right = self.parse_expression_or_missing();

        let mut assignment = self.new_node(operator.expression);
        assignment.set_attribute("Left", left);
        assignment.set_attribute("OperatorToken", operator_token);
        assignment.set_attribute("Right", right);
        self.complete(marker, assignment)
    }

    /// Precedence climbing over the left-associative binary operators.
    fn parse_binary(&mut self, min_precedence: u8) -> SyntaxNode {
        let marker = self.marker();
        let mut left = self.parse_prefix();
        loop {
            let operator = BINARY_OPERATORS
                .iter()
                .find(|(_, operator)| self.at(operator.token))
                .copied();
            let Some((precedence, operator)) = operator else {
                break;
            };
            if precedence < min_precedence {
                break;
            }
            let operator_token = self.bump();
            let right = if self.can_start_expression() {
                self.parse_binary(precedence + 1)
            } else {
                self.expected(vec!["expression".to_string()]);
                self.missing_expression()
            };

            let mut binary = self.new_node(operator.expression);
            binary.set_attribute("Left", left);
            binary.set_attribute("OperatorToken", operator_token);
            binary.set_attribute("Right", right);
            left = self.complete(marker, binary);
        }
        left
    }

    fn parse_prefix(&mut self) -> SyntaxNode {
        let operator = PREFIX_OPERATORS
            .iter()
            .find(|operator| self.at(operator.token))
            .copied();
        let Some(operator) = operator else {
            return self.parse_postfix();
        };
        if !self.enter_recursion() {
            self.exit_recursion();
            return self.missing_expression();
        }
        let marker = self.marker();
        let operator_token = self.bump();
        let operand = if self.can_start_expression() {
            self.parse_prefix()
        } else {
            self.expected(vec!["expression".to_string()]);
            self.missing_expression()
        };
        self.exit_recursion();

        let mut unary = self.new_node(operator.expression);
        unary.set_attribute("OperatorToken", operator_token);
        unary.set_attribute("Operand", operand);
        self.complete(marker, unary)
    }

    fn parse_postfix(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let mut expression = self.parse_primary();
        while self.at("OpenParenToken") {
            let argument_list = self.parse_argument_list();
            let mut invocation = self.new_node("InvocationExpression");
            invocation.set_attribute("Expression", expression);
            invocation.set_attribute("ArgumentList", argument_list);
            expression = self.complete(marker, invocation);
        }
        expression
    }

    fn parse_argument_list(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let open = self.bump();
        let arguments = self.parse_separated_list(
            "CloseParenToken",
            Self::can_start_expression,
            Self::parse_expression,
        );
        let close = self.expect("CloseParenToken");

        let mut list = self.new_node("ArgumentList");
        list.set_attribute("OpenParenToken", open);
        list.set_attribute("Arguments", arguments);
        list.set_attribute("CloseParenToken", close);
        self.complete(marker, list)
    }

    fn parse_primary(&mut self) -> SyntaxNode {
        let literal_kind = match self.peek_kind() {
            "NumericLiteralToken" => Some("NumericLiteralExpression"),
            "StringLiteralToken" => Some("StringLiteralExpression"),
            "TrueKeyword" => Some("TrueLiteralExpression"),
            "FalseKeyword" => Some("FalseLiteralExpression"),
            "NullKeyword" => Some("NullLiteralExpression"),
            _ => None,
        };
        if let Some(kind) = literal_kind {
            let marker = self.marker();
            let token = self.bump();
            let mut literal = self.new_node(kind);
            literal.set_attribute("Token", token);
            return self.complete(marker, literal);
        }

        match self.peek_kind() {
            "IdentifierToken" => {
                let marker = self.marker();
                let identifier = self.bump();
                let mut name = self.new_node("IdentifierName");
                name.set_attribute("Identifier", identifier);
                self.complete(marker, name)
            },
            "OpenParenToken" => self.parse_parenthesized_expression(),
            "OpenBracketToken" => self.parse_array_expression(),
            "InterpolatedStringStartToken" => self.parse_interpolated_string(),
            _ => {
                self.expected(vec!["expression".to_string()]);
                self.missing_expression()
            },
        }
    }

    fn parse_parenthesized_expression(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let open = self.bump();
        let expression = self.parse_expression_or_missing();
        let close = self.expect("CloseParenToken");

        let mut parenthesized = self.new_node("ParenthesizedExpression");
        parenthesized.set_attribute("OpenParenToken", open);
        parenthesized.set_attribute("Expression", expression);
        parenthesized.set_attribute("CloseParenToken", close);
        self.complete(marker, parenthesized)
    }

    fn parse_array_expression(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let open = self.bump();
        let elements = self.parse_separated_list(
            "CloseBracketToken",
            Self::can_start_expression,
            Self::parse_expression,
        );
        let close = self.expect("CloseBracketToken");

        let mut array = self.new_node("ArrayExpression");
        array.set_attribute("OpenBracketToken", open);
        array.set_attribute("Elements", elements);
        array.set_attribute("CloseBracketToken", close);
        self.complete(marker, array)
    }

    fn parse_interpolated_string(&mut self) -> SyntaxNode {
        let marker = self.marker();
        let start = self.bump();
        let mut contents = Vec::new();
        loop {
            let content_marker = self.marker();
            let content = match self.peek_kind() {
                "InterpolatedStringTextToken" => {
                    let text = self.bump();
                    let mut node = self.new_node("InterpolatedStringText");
                    node.set_attribute("TextToken", text);
                    node
                },
                "OpenBraceToken" => {
                    let open = self.bump();
                    let expression = self.parse_expression_or_missing();
                    let close = self.expect("CloseBraceToken");
                    let mut node = self.new_node("Interpolation");
                    node.set_attribute("OpenBraceToken", open);
                    node.set_attribute("Expression", expression);
                    node.set_attribute("CloseBraceToken", close);
                    node
                },
                _ => break,
            };
            contents.push(self.complete(content_marker, content));
        }
        let end = self.expect("InterpolatedStringEndToken");

        let mut string = self.new_node("InterpolatedStringExpression");
        string.set_attribute("StringStartToken", start);
        string.set_attribute("Contents", SyntaxList::Nodes(contents));
        string.set_attribute("StringEndToken", end);
        self.complete(marker, string)
    }
}

fn describe_kind(kind: &str) -> String {
    match kind {
        "IdentifierToken" => "identifier".to_string(),
        "EndOfFileToken" => "end of input".to_string(),
        _ => match fixed_text(kind) {
            Some(text) if !text.is_empty() => format!("`{text}`"),
            _ => kind.to_string(),
        },
    }
}
