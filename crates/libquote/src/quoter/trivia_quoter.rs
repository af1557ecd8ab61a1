use crate::call::ApiCall;
use crate::call::Argument;
use crate::kind_registry::TriviaCategory;
use crate::quoter::Quoter;
use crate::syntax::SyntaxTrivia;
use crate::QuoteError;

impl Quoter<'_> {
    /// Quotes one trivia. Returns `None` for trivia that is dropped: empty
    /// text, and under default formatting whitespace and well-known
    /// singletons.
    pub fn quote_trivia(
        &self,
        trivia: &SyntaxTrivia,
    ) -> Result<Option<ApiCall>, QuoteError> {
        if trivia.text.is_empty() {
            return Ok(None);
        }
        let default_formatting = self.options.use_default_formatting;
        let category = self
            .registry
            .trivia_schema(&trivia.kind)
            .map(|schema| schema.category);
        if default_formatting && category == Some(TriviaCategory::Whitespace) {
            return Ok(None);
        }

        if let Some(well_known) = self.registry.find_well_known(trivia) {
            if default_formatting {
                return Ok(None);
            }
            return Ok(Some(ApiCall::builder(well_known.name.as_str(), Vec::new())));
        }

        if let Some(structure) = &trivia.structure {
            let structure = self.quote_node(structure)?;
            return Ok(Some(ApiCall::builder(
                TriviaCategory::Structured.builder_name(),
                vec![Argument::Call(structure)],
            )));
        }

        match category {
            Some(category) if category != TriviaCategory::Structured => {
                Ok(Some(ApiCall::builder(category.builder_name(), vec![
                    Argument::str(trivia.text.as_str()),
                ])))
            },
            _ => Err(QuoteError::UnsupportedNodeKind {
                kind: trivia.kind.clone(),
            }),
        }
    }
}
