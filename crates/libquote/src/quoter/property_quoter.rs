use crate::call::Argument;
use crate::call::Literal;
use crate::kind_registry::AttributeType;
use crate::kind_registry::NodeType;
use crate::quoter::quoted_value::QuotedValue;
use crate::quoter::Quoter;
use crate::syntax::AttributeValue;
use crate::syntax::SyntaxNode;
use crate::QuoteError;

impl Quoter<'_> {
    /// Quotes the structural attributes of `node`, in attribute order, each
    /// tagged with its attribute name.
    ///
    /// Kind-selector types get a synthetic `Kind` value first. Cosmetic and
    /// unknown attributes are skipped, as are attributes that quote to
    /// nothing (absent values, empty lists, skipped trivia).
    pub(super) fn quote_properties(
        &self,
        node: &SyntaxNode,
        node_type: &NodeType,
    ) -> Result<Vec<QuotedValue>, QuoteError> {
        let mut values = Vec::with_capacity(node.attributes.len() + 1);
        if node_type.kind_selector {
            values.push(QuotedValue::new(
                "Kind",
                Argument::Kind(node.kind.clone()),
            ));
        }

        for attribute in &node.attributes {
            if attribute.value.is_absent() {
                continue;
            }
            let Some(schema) = node_type.structural_attribute(&attribute.name)
            else {
                continue;
            };
            let argument = match &attribute.value {
                AttributeValue::Absent => None,
                AttributeValue::Bool(value) => {
                    Some(Argument::Literal(Literal::Bool(*value)))
                },
                AttributeValue::Str(value) => Some(Argument::str(value.as_str())),
                AttributeValue::Node(child) => {
                    Some(Argument::Call(self.quote_node(child)?))
                },
                AttributeValue::Token(token) => {
                    self.quote_token(token)?.map(Argument::Call)
                },
                AttributeValue::List(list) => {
                    let element = match &schema.ty {
                        AttributeType::List { element, .. } => element.as_str(),
                        _ => "Node",
                    };
                    self.quote_list(list, element)?.map(Argument::Call)
                },
            };
            if let Some(argument) = argument {
                values.push(QuotedValue::new(&schema.name, argument));
            }
        }
        Ok(values)
    }
}
