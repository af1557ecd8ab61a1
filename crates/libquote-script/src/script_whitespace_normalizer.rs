//! Re-derives the standard layout of a script tree.
//!
//! Whitespace and line-break trivia are dropped and rebuilt: one space
//! between tokens unless they bind tightly (`f(a)`, `-x`, `a;`), a line break
//! after every statement and after a block's `{`, and four spaces of
//! indentation per block level. Comments, directives and skipped tokens are
//! kept in place.

use crate::script_registry::script_registry;
use crate::script_tokens::PREFIX_OPERATORS;
use libquote::kind_registry::TriviaCategory;
use libquote::syntax::AttributeValue;
use libquote::syntax::SyntaxList;
use libquote::syntax::SyntaxNode;
use libquote::syntax::SyntaxToken;
use libquote::syntax::SyntaxTrivia;
use libquote::syntax::TriviaVec;

const INDENT: &str = "    ";

const STATEMENT_KINDS: &[&str] = &[
    "FunctionDeclaration",
    "VariableDeclaration",
    "IfStatement",
    "ReturnStatement",
    "Block",
    "ExpressionStatement",
];

/// Returns a copy of `node` laid out in the standard style.
pub fn normalize_whitespace(node: &SyntaxNode) -> SyntaxNode {
    let mut normalized = node.clone();
    let mut slots = Vec::new();
    collect_node(&mut normalized, 0, &mut slots);
    lay_out(slots);
    normalized
}

/// A token in render order with the layout facts its ancestors decide.
struct TokenSlot<'a> {
    token: &'a mut SyntaxToken,
    depth: usize,
    glue_before: bool,
    glue_after: bool,
    break_after: bool,
}

impl<'a> TokenSlot<'a> {
    fn plain(token: &'a mut SyntaxToken, depth: usize) -> Self {
        Self {
            token,
            depth,
            glue_before: false,
            glue_after: false,
            break_after: false,
        }
    }
}

fn collect_node<'a>(node: &'a mut SyntaxNode, depth: usize, slots: &mut Vec<TokenSlot<'a>>) {
    let kind = node.kind.as_str();
    let is_block = kind == "Block";
    for attribute in node.attributes.iter_mut() {
        let name = attribute.name.as_str();
        match &mut attribute.value {
            AttributeValue::Token(token) => {
                let (glue_before, glue_after) = glue(kind, name);
                slots.push(TokenSlot {
                    token,
                    depth,
                    glue_before,
                    glue_after,
                    break_after: is_block && name == "OpenBraceToken",
                });
            },
            AttributeValue::Node(child) => collect_node(child, depth, slots),
            AttributeValue::List(list) => {
                let depth = if is_block && name == "Statements" {
                    depth + 1
                } else {
                    depth
                };
                collect_list(list, depth, slots);
            },
            AttributeValue::Absent | AttributeValue::Bool(_) | AttributeValue::Str(_) => (),
        }
    }
    if STATEMENT_KINDS.contains(&kind)
        && let Some(last) = slots.last_mut()
    {
        last.break_after = true;
    }
}

fn collect_list<'a>(list: &'a mut SyntaxList, depth: usize, slots: &mut Vec<TokenSlot<'a>>) {
    match list {
        SyntaxList::Nodes(nodes) => {
            for node in nodes {
                collect_node(node, depth, slots);
            }
        },
        SyntaxList::Separated { nodes, separators } => {
            let mut separators = separators.iter_mut();
            for node in nodes {
                collect_node(node, depth, slots);
                if let Some(separator) = separators.next() {
                    slots.push(TokenSlot::plain(separator, depth));
                }
            }
            slots.extend(separators.map(|separator| TokenSlot::plain(separator, depth)));
        },
        SyntaxList::Tokens(tokens) => {
            slots.extend(tokens.iter_mut().map(|token| TokenSlot::plain(token, depth)));
        },
        SyntaxList::Trivia(_) => (),
    }
}

/// Whether the token held by attribute `name` of a `kind` node binds to its
/// neighbours (before, after).
fn glue(kind: &str, name: &str) -> (bool, bool) {
    match (kind, name) {
        ("InterpolatedStringExpression", "StringStartToken") => (false, true),
        ("InterpolatedStringExpression", "StringEndToken") => (true, false),
        ("InterpolatedStringText", _) | ("Interpolation", _) => (true, true),
        (_, "OperatorToken")
            if PREFIX_OPERATORS
                .iter()
                .any(|operator| operator.expression == kind) =>
        {
            (false, true)
        },
        _ => (false, false),
    }
}

fn is_tight(previous: &str, current: &str) -> bool {
    matches!(
        current,
        "CloseParenToken" | "CloseBracketToken" | "SemicolonToken" | "CommaToken"
    ) || matches!(previous, "OpenParenToken" | "OpenBracketToken")
        || (current == "OpenParenToken"
            && matches!(
                previous,
                "IdentifierToken" | "CloseParenToken" | "CloseBracketToken"
            ))
}

fn category(trivia: &SyntaxTrivia) -> Option<TriviaCategory> {
    script_registry()
        .trivia_schema(&trivia.kind)
        .map(|schema| schema.category)
}

fn is_layout(trivia: &SyntaxTrivia) -> bool {
    matches!(
        category(trivia),
        Some(TriviaCategory::Whitespace | TriviaCategory::EndOfLine)
    )
}

/// Comments that run to the end of their line.
fn is_line_comment(trivia: &SyntaxTrivia) -> bool {
    match category(trivia) {
        Some(TriviaCategory::DocumentationComment) => true,
        Some(TriviaCategory::Comment) => !trivia.text.starts_with("/*"),
        _ => false,
    }
}

fn space() -> SyntaxTrivia {
    SyntaxTrivia::new("WhitespaceTrivia", " ")
}

fn line_feed() -> SyntaxTrivia {
    SyntaxTrivia::new("EndOfLineTrivia", "\n")
}

fn push_indent(trivia: &mut TriviaVec, depth: usize) {
    if depth > 0 {
        trivia.push(SyntaxTrivia::new("WhitespaceTrivia", INDENT.repeat(depth)));
    }
}

/// Lays out the inside of a directive (`#region text` plus a line break) or
/// of skipped tokens (separated by single spaces).
fn normalize_structure(mut structure: SyntaxNode) -> SyntaxTrivia {
    let is_skipped = structure.kind.as_str() == "SkippedTokensTrivia";
    let has_message = structure
        .token("EndOfDirectiveToken")
        .is_some_and(|token| !token.leading.is_empty());
    let mut slots = Vec::new();
    collect_node(&mut structure, 0, &mut slots);
    let count = slots.len();
    for (index, slot) in slots.into_iter().enumerate() {
        let token = slot.token;
        token.leading.retain(|trivia| !is_layout(trivia));
        token.trailing.retain(|trivia| !is_layout(trivia));
        let spaced = if is_skipped {
            index + 1 < count
        } else {
            has_message && token.kind.as_str().ends_with("Keyword")
        };
        if spaced {
            token.trailing.push(space());
        }
        if !is_skipped && token.kind.as_str() == "EndOfDirectiveToken" {
            token.trailing.push(line_feed());
        }
    }
    SyntaxTrivia::structured(structure)
}

fn lay_out(slots: Vec<TokenSlot<'_>>) {
    let mut at_line_start = true;

    // Kind and glue of the last token with text.
    let mut previous: Option<(String, bool)> = None;

    for slot in slots {
        let token = slot.token;
        let old_leading = std::mem::take(&mut token.leading);
        let old_trailing = std::mem::take(&mut token.trailing);
        let mut leading = TriviaVec::new();
        for mut trivia in old_leading.into_iter().filter(|trivia| !is_layout(trivia)) {
            let is_directive = trivia.structure.as_ref().is_some_and(|structure| {
                structure.kind.as_str() != "SkippedTokensTrivia"
            });
            if let Some(structure) = trivia.structure.take() {
                trivia = normalize_structure(*structure);
            }
            if is_directive && !at_line_start {
                leading.push(line_feed());
                at_line_start = true;
            }
            if at_line_start {
                push_indent(&mut leading, slot.depth);
            } else {
                leading.push(space());
            }
            let ends_line = is_directive || is_line_comment(&trivia);
            leading.push(trivia);
            if ends_line && !is_directive {
                leading.push(line_feed());
            }
            at_line_start = ends_line;
        }

        if !token.text.is_empty() {
            let kind = token.kind.as_str();
            if at_line_start {
                push_indent(&mut leading, slot.depth);
            } else if !leading.is_empty() {
                leading.push(space());
            } else if let Some((previous_kind, previous_glue)) = &previous {
                let tight = *previous_glue || slot.glue_before || is_tight(previous_kind, kind);
                if !tight {
                    leading.push(space());
                }
            }
            at_line_start = false;
            previous = Some((kind.to_string(), slot.glue_after));
        }

        let mut trailing = TriviaVec::new();
        let mut ends_line = slot.break_after;
        for trivia in old_trailing.into_iter().filter(|trivia| !is_layout(trivia)) {
            ends_line |= is_line_comment(&trivia);
            trailing.push(space());
            trailing.push(trivia);
        }
        if ends_line {
            trailing.push(line_feed());
            at_line_start = true;
        }

        token.leading = leading;
        token.trailing = trailing;
    }
}
