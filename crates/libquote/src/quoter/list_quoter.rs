use crate::call::ApiCall;
use crate::call::Argument;
use crate::quoter::Quoter;
use crate::syntax::ListShape;
use crate::syntax::SyntaxList;
use crate::syntax::SyntaxTrivia;
use crate::QuoteError;

type Result<T> = std::result::Result<T, QuoteError>;

impl Quoter<'_> {
    /// Quotes a list whose node elements are of type `element`.
    ///
    /// An empty result quotes to nothing, a single element to the singleton
    /// form, anything longer to the plural form wrapping an array literal.
    pub(super) fn quote_list(
        &self,
        list: &SyntaxList,
        element: &str,
    ) -> Result<Option<ApiCall>> {
        let mut elements = Vec::with_capacity(list.len());
        for item in list.with_separators() {
            if let Some(call) = self.quote_element(item)? {
                elements.push(Argument::Call(call));
            }
        }
        Ok(collapse_list(list.shape(), element, elements))
    }

    pub(super) fn quote_trivia_list(
        &self,
        trivia: &[SyntaxTrivia],
    ) -> Result<Option<ApiCall>> {
        let mut elements = Vec::with_capacity(trivia.len());
        for item in trivia {
            if let Some(call) = self.quote_trivia(item)? {
                elements.push(Argument::Call(call));
            }
        }
        Ok(collapse_list(ListShape::Trivia, "Trivia", elements))
    }
}

/// Builds the call for a list of already quoted elements.
fn collapse_list(
    shape: ListShape,
    element: &str,
    mut elements: Vec<Argument>,
) -> Option<ApiCall> {
    let (singleton, plural, array) = match shape {
        ListShape::Nodes => (
            format!("SingletonList<{element}>"),
            format!("List<{element}>"),
            element.to_string(),
        ),
        ListShape::Separated => (
            format!("SingletonSeparatedList<{element}>"),
            format!("SeparatedList<{element}>"),
            "NodeOrToken".to_string(),
        ),
        ListShape::Tokens => (
            "TokenList".to_string(),
            "TokenList".to_string(),
            "Token".to_string(),
        ),
        ListShape::Trivia => (
            "TriviaList".to_string(),
            "TriviaList".to_string(),
            "Trivia".to_string(),
        ),
    };
    match elements.len() {
        0 => None,
        1 => Some(ApiCall::builder(singleton, vec![elements.remove(0)])),
        _ => Some(ApiCall::builder(plural, vec![Argument::Call(
            ApiCall::array(array, elements),
        )])),
    }
}

/// The explicit empty trivia list `TriviaList()`.
pub(super) fn empty_trivia_list() -> ApiCall {
    ApiCall::builder("TriviaList", Vec::new())
}
