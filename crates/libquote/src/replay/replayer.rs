use crate::call::ApiCall;
use crate::call::Argument;
use crate::call::CallTag;
use crate::call::Literal;
use crate::call::MethodCall;
use crate::kind_registry::AttributeType;
use crate::kind_registry::BuilderParam;
use crate::kind_registry::BuilderSpec;
use crate::kind_registry::KindRegistry;
use crate::kind_registry::NodeType;
use crate::kind_registry::ParamType;
use crate::kind_registry::TokenCategory;
use crate::kind_registry::TriviaCategory;
use crate::replay::ReplayValue;
use crate::syntax::AttributeValue;
use crate::syntax::ListShape;
use crate::syntax::SyntaxKind;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxNode;
use crate::syntax::SyntaxToken;
use crate::syntax::SyntaxTrivia;
use crate::syntax::TokenValue;
use crate::syntax::TriviaVec;
use crate::QuoteError;
use std::ops::Range;

type Result<T> = std::result::Result<T, QuoteError>;

/// Outcome of one builder invocation; the error is the reason it failed.
type Attempt<T> = std::result::Result<T, String>;

/// Executes [`ApiCall`]s against a [`KindRegistry`].
///
/// Besides the registry's node builders, the replayer understands the
/// intrinsic builders every call tree uses: `Token`, `MissingToken`,
/// `Identifier`, `Literal`, `BadToken`, the text-token builders, the trivia
/// builders (`Whitespace`, `Comment`, ..., `Trivia`), well-known trivia
/// names, and the list builders (`TriviaList`, `TokenList`, `List<T>`,
/// `SingletonList<T>`, `SeparatedList<T>`, `SingletonSeparatedList<T>`).
#[derive(Clone, Copy, Debug)]
pub struct Replayer<'a> {
    registry: &'a KindRegistry,
}

impl<'a> Replayer<'a> {
    pub fn new(registry: &'a KindRegistry) -> Self {
        Self { registry }
    }

    /// Runs the builder call, then each modifier in order.
    pub fn replay(&self, api_call: &ApiCall) -> Result<ReplayValue> {
        let mut value = self.invoke(&api_call.builder_call)?;
        for modifier in &api_call.modifier_calls {
            value = self.apply_modifier(value, modifier)?;
        }
        Ok(value)
    }

    /// Like [`replay`](Self::replay), for calls that must produce a node.
    pub fn replay_node(&self, api_call: &ApiCall) -> Result<SyntaxNode> {
        match self.replay(api_call)? {
            ReplayValue::Node(node) => Ok(node),
            other => Err(unresolved(
                &api_call.builder_call,
                format!("expected a node, produced a {}", other.describe()),
            )),
        }
    }

    fn replay_argument(&self, argument: &Argument) -> Result<ReplayValue> {
        match argument {
            Argument::Literal(literal) => Ok(ReplayValue::Literal(literal.clone())),
            Argument::Kind(kind) => Ok(ReplayValue::Kind(kind.clone())),
            Argument::Call(call) => self.replay(call),
        }
    }

    fn replay_arguments(&self, call: &MethodCall) -> Result<Vec<ReplayValue>> {
        call.arguments
            .iter()
            .map(|argument| self.replay_argument(argument))
            .collect()
    }

    fn invoke(&self, call: &MethodCall) -> Result<ReplayValue> {
        let arguments = self.replay_arguments(call)?;
        let outcome = match call.name.tag {
            CallTag::Array => Ok(ReplayValue::Array(arguments)),
            CallTag::Builder => self.call_builder(&call.name.name, arguments),
            CallTag::Modifier | CallTag::Kind => {
                Err("expected a builder call".to_string())
            },
        };
        outcome.map_err(|reason| unresolved(call, reason))
    }

    fn call_builder(
        &self,
        name: &str,
        arguments: Vec<ReplayValue>,
    ) -> Attempt<ReplayValue> {
        match name {
            "Token" => return self.token(arguments).map(ReplayValue::Token),
            "MissingToken" => {
                return self.missing_token(arguments).map(ReplayValue::Token);
            },
            "Identifier" => {
                return self.identifier(arguments).map(ReplayValue::Token);
            },
            "Literal" => return self.literal(arguments).map(ReplayValue::Token),
            "BadToken" => return self.bad_token(arguments).map(ReplayValue::Token),
            "Trivia" => {
                let mut arguments = Arguments::exactly(arguments, 1)?;
                let structure = arguments.node()?;
                return Ok(ReplayValue::Trivia(SyntaxTrivia::structured(structure)));
            },
            "TriviaList" => return list_of(ListShape::Trivia, arguments),
            "TokenList" => return list_of(ListShape::Tokens, arguments),
            _ => (),
        }

        if let Some((base, _)) = generic_name(name) {
            return match base {
                "List" => list_of(ListShape::Nodes, arguments),
                "SeparatedList" => list_of(ListShape::Separated, arguments),
                "SingletonList" => singleton_list(ListShape::Nodes, arguments),
                "SingletonSeparatedList" => {
                    singleton_list(ListShape::Separated, arguments)
                },
                _ => Err(format!("unknown list builder `{base}`")),
            };
        }

        if let Some(well_known) = self.registry.well_known(name) {
            Arguments::exactly(arguments, 0)?;
            return Ok(ReplayValue::Trivia(well_known.trivia.clone()));
        }

        if let Some(category) = TriviaCategory::from_builder_name(name) {
            let mut arguments = Arguments::exactly(arguments, 1)?;
            let text = arguments.string()?;
            let kind = self
                .registry
                .trivia_kind_for(category, &text)
                .ok_or_else(|| format!("no trivia kind is built by `{name}`"))?;
            return Ok(ReplayValue::Trivia(SyntaxTrivia::new(kind.clone(), text)));
        }

        if let Some(kind) = self.registry.text_builder_kind(name) {
            let mut arguments = Arguments::exactly(arguments, 4)?;
            let leading = arguments.trivia()?;
            let text = arguments.string()?;
            let value = arguments.string()?;
            let trailing = arguments.trivia()?;
            return Ok(ReplayValue::Token(
                SyntaxToken::new(kind.clone(), text)
                    .with_value(TokenValue::Str(value))
                    .with_leading(leading)
                    .with_trailing(trailing),
            ));
        }

        self.node_builder(name, arguments).map(ReplayValue::Node)
    }

    /// `Token(kind)`, `Token(leading, kind, trailing)` or
    /// `Token(leading, kind, text, value, trailing)`.
    fn token(&self, arguments: Vec<ReplayValue>) -> Attempt<SyntaxToken> {
        let arity = arguments.len();
        let mut arguments = Arguments::new(arguments);
        match arity {
            1 => Ok(self.registry.make_token(&arguments.kind()?)),
            3 => {
                let leading = arguments.trivia()?;
                let kind = arguments.kind()?;
                let trailing = arguments.trivia()?;
                Ok(self
                    .registry
                    .make_token(&kind)
                    .with_leading(leading)
                    .with_trailing(trailing))
            },
            5 => {
                let leading = arguments.trivia()?;
                let kind = arguments.kind()?;
                let text = arguments.string()?;
                let value = arguments.string()?;
                let trailing = arguments.trivia()?;
                let is_text = matches!(
                    self.registry.token_schema(&kind).map(|schema| &schema.category),
                    Some(TokenCategory::Text { .. }),
                );
                let mut token = SyntaxToken::new(kind, text)
                    .with_leading(leading)
                    .with_trailing(trailing);
                if is_text {
                    token.value = Some(TokenValue::Str(value));
                }
                Ok(token)
            },
            _ => Err(arity_error(arity, "1, 3 or 5")),
        }
    }

    fn missing_token(&self, arguments: Vec<ReplayValue>) -> Attempt<SyntaxToken> {
        let arity = arguments.len();
        let mut arguments = Arguments::new(arguments);
        match arity {
            1 => Ok(SyntaxToken::missing(arguments.kind()?)),
            3 => {
                let leading = arguments.trivia()?;
                let kind = arguments.kind()?;
                let trailing = arguments.trivia()?;
                Ok(SyntaxToken::missing(kind)
                    .with_leading(leading)
                    .with_trailing(trailing))
            },
            _ => Err(arity_error(arity, "1 or 3")),
        }
    }

    fn identifier(&self, arguments: Vec<ReplayValue>) -> Attempt<SyntaxToken> {
        let kind = self.identifier_kind()?;
        let arity = arguments.len();
        let mut arguments = Arguments::new(arguments);
        match arity {
            1 => Ok(SyntaxToken::new(kind, arguments.string()?)),
            3 => {
                let leading = arguments.trivia()?;
                let text = arguments.string()?;
                let trailing = arguments.trivia()?;
                Ok(SyntaxToken::new(kind, text)
                    .with_leading(leading)
                    .with_trailing(trailing))
            },
            _ => Err(arity_error(arity, "1 or 3")),
        }
    }

    /// `Literal(value)`, `Literal(text, value)` or
    /// `Literal(leading, text, value, trailing)`.
    fn literal(&self, arguments: Vec<ReplayValue>) -> Attempt<SyntaxToken> {
        let arity = arguments.len();
        let mut arguments = Arguments::new(arguments);
        let (leading, text, value, trailing) = match arity {
            1 => {
                let value = arguments.token_value()?;
                (TriviaVec::new(), value.canonical_text(), value, TriviaVec::new())
            },
            2 => {
                let text = arguments.string()?;
                (TriviaVec::new(), text, arguments.token_value()?, TriviaVec::new())
            },
            4 => {
                let leading = arguments.trivia()?;
                let text = arguments.string()?;
                let value = arguments.token_value()?;
                (leading, text, value, arguments.trivia()?)
            },
            _ => return Err(arity_error(arity, "1, 2 or 4")),
        };
        let kind = self
            .registry
            .literal_kind(value.value_type())
            .ok_or_else(|| {
                format!("no token kind carries {:?} literals", value.value_type())
            })?;
        Ok(SyntaxToken::new(kind.clone(), text)
            .with_value(value)
            .with_leading(leading)
            .with_trailing(trailing))
    }

    fn bad_token(&self, arguments: Vec<ReplayValue>) -> Attempt<SyntaxToken> {
        let kind = self
            .registry
            .bad_kind()
            .ok_or_else(|| "the registry declares no bad token kind".to_string())?;
        let mut arguments = Arguments::exactly(arguments, 3)?;
        let leading = arguments.trivia()?;
        let text = arguments.string()?;
        let trailing = arguments.trivia()?;
        Ok(SyntaxToken::new(kind.clone(), text)
            .with_leading(leading)
            .with_trailing(trailing))
    }

    fn identifier_kind(&self) -> Attempt<SyntaxKind> {
        self.registry
            .identifier_kind()
            .cloned()
            .ok_or_else(|| "the registry declares no identifier token kind".to_string())
    }

    /// Runs the first overload of `name`, in declaration order, whose
    /// parameters fit the argument shapes.
    fn node_builder(
        &self,
        name: &str,
        arguments: Vec<ReplayValue>,
    ) -> Attempt<SyntaxNode> {
        let mut overloads = self.registry.node_builders(name).peekable();
        if overloads.peek().is_none() {
            return Err(format!("unknown builder `{name}`"));
        }
        for (node_type, builder) in overloads {
            if let Some(bindings) = bind_arguments(builder, &arguments) {
                return self.build_node(node_type, bindings, arguments);
            }
        }
        let shapes: Vec<&str> =
            arguments.iter().map(ReplayValue::describe).collect();
        Err(format!(
            "no overload of `{name}` accepts ({})",
            shapes.join(", "),
        ))
    }

    fn build_node(
        &self,
        node_type: &NodeType,
        bindings: Vec<(&BuilderParam, Range<usize>)>,
        arguments: Vec<ReplayValue>,
    ) -> Attempt<SyntaxNode> {
        let mut arguments: Vec<Option<ReplayValue>> =
            arguments.into_iter().map(Some).collect();

        let kind_argument = bindings
            .iter()
            .find(|(param, _)| param.ty == ParamType::Kind)
            .and_then(|(_, range)| match &arguments[range.start] {
                Some(ReplayValue::Kind(kind)) => Some(kind.clone()),
                _ => None,
            });
        let kind = match kind_argument {
            Some(kind) if node_type.kinds.contains(&kind) => kind,
            Some(kind) => {
                return Err(format!(
                    "`{kind}` is not a kind of node type `{}`",
                    node_type.name,
                ));
            },
            None => node_type.kinds.first().cloned().ok_or_else(|| {
                format!("node type `{}` declares no kinds", node_type.name)
            })?,
        };
        let mut node = self
            .registry
            .instantiate(&kind)
            .ok_or_else(|| format!("cannot instantiate `{kind}`"))?;

        for (param, range) in bindings {
            if param.ty == ParamType::Kind {
                continue;
            }
            let target = param.target_attribute();
            let schema = node_type
                .attributes
                .iter()
                .find(|attr| attr.name.eq_ignore_ascii_case(target))
                .ok_or_else(|| {
                    format!(
                        "node type `{}` has no attribute for parameter `{}`",
                        node_type.name, param.name,
                    )
                })?;
            let values: Vec<ReplayValue> =
                arguments[range].iter_mut().filter_map(Option::take).collect();
            let value = if param.variadic {
                let ParamType::List(shape) = param.ty else {
                    return Err(format!(
                        "variadic parameter `{}` is not list-typed",
                        param.name,
                    ));
                };
                match <[ReplayValue; 1]>::try_from(values) {
                    Ok([ReplayValue::List(list)]) if list.shape() == shape => {
                        AttributeValue::List(list)
                    },
                    Ok([single]) => {
                        AttributeValue::List(elements_to_list(shape, vec![single])?)
                    },
                    Err(values) => {
                        AttributeValue::List(elements_to_list(shape, values)?)
                    },
                }
            } else {
                let value = values
                    .into_iter()
                    .next()
                    .ok_or_else(|| format!("no value for `{}`", param.name))?;
                self.attribute_value(value, &schema.ty)?
            };
            node.set_attribute(&schema.name, value);
        }
        Ok(node)
    }

    fn apply_modifier(
        &self,
        value: ReplayValue,
        modifier: &MethodCall,
    ) -> Result<ReplayValue> {
        if modifier.name.tag != CallTag::Modifier {
            return Err(unresolved(modifier, "expected a modifier call".to_string()));
        }
        let mut node = match value {
            ReplayValue::Node(node) => node,
            other => {
                return Err(unresolved(
                    modifier,
                    format!("modifiers apply to nodes, not to a {}", other.describe()),
                ));
            },
        };
        let arguments = self.replay_arguments(modifier)?;
        let [argument] = <[ReplayValue; 1]>::try_from(arguments).map_err(|arguments| {
            unresolved(modifier, arity_error(arguments.len(), "1"))
        })?;
        let schema = self
            .registry
            .node_type_of(&node.kind)
            .and_then(|node_type| node_type.structural_attribute(&modifier.name.name))
            .ok_or_else(|| {
                unresolved(
                    modifier,
                    format!("`{}` has no attribute `{}`", node.kind, modifier.name.name),
                )
            })?;
        let value = self
            .attribute_value(argument, &schema.ty)
            .map_err(|reason| unresolved(modifier, reason))?;
        node.set_attribute(&schema.name, value);
        Ok(ReplayValue::Node(node))
    }

    /// Converts a replayed value into the value an attribute of type `ty`
    /// holds. A string stored into a token attribute becomes an identifier
    /// token.
    fn attribute_value(
        &self,
        value: ReplayValue,
        ty: &AttributeType,
    ) -> Attempt<AttributeValue> {
        match (value, ty) {
            (ReplayValue::Node(node), AttributeType::Node) => {
                Ok(AttributeValue::Node(Box::new(node)))
            },
            (ReplayValue::Token(token), AttributeType::Token) => {
                Ok(AttributeValue::Token(token))
            },
            (ReplayValue::List(list), AttributeType::List { shape, .. })
                if list.shape() == *shape =>
            {
                Ok(AttributeValue::List(list))
            },
            (ReplayValue::Literal(Literal::Bool(value)), AttributeType::Bool) => {
                Ok(AttributeValue::Bool(value))
            },
            (ReplayValue::Literal(Literal::Str(value)), AttributeType::Str) => {
                Ok(AttributeValue::Str(value))
            },
            (ReplayValue::Literal(Literal::Str(text)), AttributeType::Token) => {
                Ok(AttributeValue::Token(SyntaxToken::new(
                    self.identifier_kind()?,
                    text,
                )))
            },
            (value, ty) => Err(format!(
                "a {} cannot be stored in a {ty:?} attribute",
                value.describe(),
            )),
        }
    }
}

/// Binds arguments to parameters positionally. Optional parameters whose
/// argument does not fit are skipped; a variadic parameter takes the rest.
fn bind_arguments<'b>(
    builder: &'b BuilderSpec,
    arguments: &[ReplayValue],
) -> Option<Vec<(&'b BuilderParam, Range<usize>)>> {
    let mut bindings = Vec::with_capacity(builder.params.len());
    let mut next = 0;
    for param in &builder.params {
        if param.variadic {
            let rest = &arguments[next..];
            let ParamType::List(shape) = param.ty else {
                return None;
            };
            let fits = match rest {
                [ReplayValue::List(list)] if list.shape() == shape => true,
                _ => rest
                    .iter()
                    .enumerate()
                    .all(|(index, value)| fits_element(shape, index, value)),
            };
            if !fits {
                return None;
            }
            bindings.push((param, next..arguments.len()));
            next = arguments.len();
        } else if arguments
            .get(next)
            .is_some_and(|argument| fits_param(param.ty, argument))
        {
            bindings.push((param, next..next + 1));
            next += 1;
        } else if !param.optional {
            return None;
        }
    }
    (next == arguments.len()).then_some(bindings)
}

fn fits_param(ty: ParamType, value: &ReplayValue) -> bool {
    match (ty, value) {
        (ParamType::Kind, ReplayValue::Kind(_))
        | (ParamType::Bool, ReplayValue::Literal(Literal::Bool(_)))
        | (ParamType::Str, ReplayValue::Literal(Literal::Str(_)))
        | (ParamType::Token, ReplayValue::Token(_))
        | (ParamType::Node, ReplayValue::Node(_)) => true,
        (ParamType::List(shape), ReplayValue::List(list)) => list.shape() == shape,
        _ => false,
    }
}

/// Whether `value` can be element `index` of a list of `shape`.
fn fits_element(shape: ListShape, index: usize, value: &ReplayValue) -> bool {
    match (shape, value) {
        (ListShape::Nodes, ReplayValue::Node(_))
        | (ListShape::Tokens, ReplayValue::Token(_))
        | (ListShape::Trivia, ReplayValue::Trivia(_)) => true,
        (ListShape::Separated, ReplayValue::Node(_)) => index % 2 == 0,
        (ListShape::Separated, ReplayValue::Token(_)) => index % 2 == 1,
        _ => false,
    }
}

fn elements_to_list(
    shape: ListShape,
    elements: Vec<ReplayValue>,
) -> Attempt<SyntaxList> {
    let mut list = SyntaxList::empty(shape);
    for (index, element) in elements.into_iter().enumerate() {
        match (&mut list, element) {
            (SyntaxList::Nodes(nodes), ReplayValue::Node(node)) => nodes.push(node),
            (SyntaxList::Tokens(tokens), ReplayValue::Token(token)) => {
                tokens.push(token)
            },
            (SyntaxList::Trivia(trivia), ReplayValue::Trivia(item)) => {
                trivia.push(item)
            },
            (SyntaxList::Separated { nodes, .. }, ReplayValue::Node(node))
                if index % 2 == 0 =>
            {
                nodes.push(node)
            },
            (SyntaxList::Separated { separators, .. }, ReplayValue::Token(token))
                if index % 2 == 1 =>
            {
                separators.push(token)
            },
            (_, element) => {
                return Err(format!(
                    "element {index} of a {shape:?} list cannot be a {}",
                    element.describe(),
                ));
            },
        }
    }
    Ok(list)
}

/// `TriviaList()`, `TriviaList(x)`, `TriviaList(a:Trivia(...))` and the
/// equivalent forms of the other plural list builders.
fn list_of(shape: ListShape, arguments: Vec<ReplayValue>) -> Attempt<ReplayValue> {
    let elements = match <[ReplayValue; 1]>::try_from(arguments) {
        Ok([ReplayValue::Array(elements)]) => elements,
        Ok([single]) => vec![single],
        Err(arguments) => arguments,
    };
    elements_to_list(shape, elements).map(ReplayValue::List)
}

fn singleton_list(
    shape: ListShape,
    arguments: Vec<ReplayValue>,
) -> Attempt<ReplayValue> {
    let mut arguments = Arguments::exactly(arguments, 1)?;
    let node = arguments.node()?;
    elements_to_list(shape, vec![ReplayValue::Node(node)]).map(ReplayValue::List)
}

/// Splits `List<Statement>` into `("List", "Statement")`.
fn generic_name(name: &str) -> Option<(&str, &str)> {
    let (base, rest) = name.split_once('<')?;
    Some((base, rest.strip_suffix('>')?))
}

fn arity_error(found: usize, expected: &str) -> String {
    format!("expected {expected} arguments, found {found}")
}

fn unresolved(call: &MethodCall, reason: String) -> QuoteError {
    QuoteError::UnresolvedCall {
        call: call.name.to_string(),
        reason,
    }
}

/// Positional, type-checked access to replayed arguments.
struct Arguments {
    values: std::vec::IntoIter<ReplayValue>,
}

impl Arguments {
    fn new(values: Vec<ReplayValue>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }

    fn exactly(values: Vec<ReplayValue>, count: usize) -> Attempt<Self> {
        if values.len() != count {
            return Err(arity_error(values.len(), &count.to_string()));
        }
        Ok(Self::new(values))
    }

    fn next(&mut self) -> Attempt<ReplayValue> {
        self.values
            .next()
            .ok_or_else(|| "too few arguments".to_string())
    }

    fn kind(&mut self) -> Attempt<SyntaxKind> {
        match self.next()? {
            ReplayValue::Kind(kind) => Ok(kind),
            other => Err(expected("kind", &other)),
        }
    }

    fn string(&mut self) -> Attempt<String> {
        match self.next()? {
            ReplayValue::Literal(Literal::Str(value)) => Ok(value),
            other => Err(expected("string", &other)),
        }
    }

    fn node(&mut self) -> Attempt<SyntaxNode> {
        match self.next()? {
            ReplayValue::Node(node) => Ok(node),
            other => Err(expected("node", &other)),
        }
    }

    fn trivia(&mut self) -> Attempt<TriviaVec> {
        match self.next()? {
            ReplayValue::List(SyntaxList::Trivia(trivia)) => {
                Ok(trivia.into_iter().collect())
            },
            other => Err(expected("trivia list", &other)),
        }
    }

    fn token_value(&mut self) -> Attempt<TokenValue> {
        match self.next()? {
            ReplayValue::Literal(literal) => {
                literal
                    .to_token_value()
                    .ok_or_else(|| "a boolean is not a token value".to_string())
            },
            other => Err(expected("literal", &other)),
        }
    }
}

fn expected(what: &str, found: &ReplayValue) -> String {
    format!("expected a {what}, found a {}", found.describe())
}
