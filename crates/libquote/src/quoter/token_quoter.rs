use crate::call::ApiCall;
use crate::call::Argument;
use crate::call::Literal;
use crate::kind_registry::TokenCategory;
use crate::quoter::list_quoter::empty_trivia_list;
use crate::quoter::Quoter;
use crate::syntax::SyntaxToken;
use crate::QuoteError;

impl Quoter<'_> {
    /// Quotes one token together with its leading and trailing trivia.
    ///
    /// Whenever either trivia list quotes to something, both are passed,
    /// the empty one as `TriviaList()`.
    pub fn quote_token(
        &self,
        token: &SyntaxToken,
    ) -> Result<Option<ApiCall>, QuoteError> {
        let leading = self.quote_trivia_list(&token.leading)?;
        let trailing = self.quote_trivia_list(&token.trailing)?;
        let trivia = match (leading, trailing) {
            (None, None) => None,
            (leading, trailing) => Some((
                Argument::Call(leading.unwrap_or_else(empty_trivia_list)),
                Argument::Call(trailing.unwrap_or_else(empty_trivia_list)),
            )),
        };
        let kind = Argument::Kind(token.kind.clone());
        let text = Argument::str(token.text.as_str());

        if token.is_missing {
            let arguments = match trivia {
                Some((leading, trailing)) => vec![leading, kind, trailing],
                None => vec![kind],
            };
            return Ok(Some(ApiCall::builder("MissingToken", arguments)));
        }

        let category = self
            .registry
            .token_schema(&token.kind)
            .map(|schema| &schema.category);
        let call = match (category, &token.value) {
            (Some(TokenCategory::Identifier), _) => {
                let arguments = match trivia {
                    Some((leading, trailing)) => vec![leading, text, trailing],
                    None => vec![text],
                };
                ApiCall::builder("Identifier", arguments)
            },

            (Some(TokenCategory::Text { builder, with_kind }), value) => {
                let (leading, trailing) = trivia.unwrap_or_else(|| {
                    (
                        Argument::Call(empty_trivia_list()),
                        Argument::Call(empty_trivia_list()),
                    )
                });
                let value_text = value
                    .as_ref()
                    .map(|value| value.value_text())
                    .unwrap_or_else(|| token.text.clone());
                let mut arguments = vec![leading];
                if *with_kind {
                    arguments.push(kind);
                }
                arguments.push(text);
                arguments.push(Argument::str(value_text));
                arguments.push(trailing);
                ApiCall::builder(builder.as_str(), arguments)
            },

            (Some(TokenCategory::Literal), Some(value)) => {
                let value_argument = Argument::Literal(Literal::from(value));
                let arguments = match trivia {
                    Some((leading, trailing)) => {
                        vec![leading, text, value_argument, trailing]
                    },
                    None if value.canonical_text() == token.text => {
                        vec![value_argument]
                    },
                    None => vec![text, value_argument],
                };
                ApiCall::builder("Literal", arguments)
            },

            (Some(TokenCategory::Bad), _) => {
                let (leading, trailing) = trivia.unwrap_or_else(|| {
                    (
                        Argument::Call(empty_trivia_list()),
                        Argument::Call(empty_trivia_list()),
                    )
                });
                ApiCall::builder("BadToken", vec![leading, text, trailing])
            },

            _ => {
                let default_text = self
                    .registry
                    .token_schema(&token.kind)
                    .map(|schema| schema.default_text.as_str())
                    .unwrap_or_default();
                if token.text != default_text {
                    let (leading, trailing) = trivia.unwrap_or_else(|| {
                        (
                            Argument::Call(empty_trivia_list()),
                            Argument::Call(empty_trivia_list()),
                        )
                    });
                    ApiCall::builder("Token", vec![
                        leading,
                        kind,
                        text.clone(),
                        text,
                        trailing,
                    ])
                } else {
                    let arguments = match trivia {
                        Some((leading, trailing)) => vec![leading, kind, trailing],
                        None => vec![kind],
                    };
                    ApiCall::builder("Token", arguments)
                }
            },
        };
        Ok(Some(call))
    }
}
