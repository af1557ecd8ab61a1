use crate::kind_registry::BuilderSpec;
use crate::kind_registry::NodeType;
use crate::kind_registry::ParamType;
use crate::kind_registry::ResolutionHint;
use crate::syntax::SyntaxKind;
use crate::QuoteError;
use std::cmp::Ordering;

/// Selects the one builder used to quote nodes of `kind`.
///
/// Candidates are enumerated in a fixed order (builder name, then parameter
/// count, then parameter names) so the choice never depends on declaration
/// order. Then:
///
/// 1. `PreferStringName` types take the first candidate whose first
///    parameter is a plain string, when there is one.
/// 2. `Literal` types keep the one-parameter candidates for their kind-only
///    kinds and the two-parameter candidates otherwise.
/// 3. Every other type keeps the candidates with the fewest required
///    parameters.
/// 4. Ties go to a candidate with a variadic parameter, then to one whose
///    sole parameter is optional, then to the first.
pub fn resolve_builder<'r>(
    node_type: &'r NodeType,
    kind: &SyntaxKind,
) -> Result<&'r BuilderSpec, QuoteError> {
    let mut candidates: Vec<&BuilderSpec> = node_type.builders.iter().collect();
    if candidates.is_empty() {
        return Err(QuoteError::UnsupportedNodeKind { kind: kind.clone() });
    }
    candidates.sort_by(|a, b| compare_candidates(a, b));

    let mut literal_arity_applied = false;
    match &node_type.hint {
        ResolutionHint::PreferStringName => {
            let string_first = candidates.iter().copied().find(|candidate| {
                candidate
                    .params
                    .first()
                    .is_some_and(|param| param.ty == ParamType::Str)
            });
            if let Some(candidate) = string_first {
                return Ok(candidate);
            }
        },
        ResolutionHint::Literal { kind_only } => {
            let arity = if kind_only.contains(kind) { 1 } else { 2 };
            let with_arity: Vec<&BuilderSpec> = candidates
                .iter()
                .copied()
                .filter(|candidate| candidate.params.len() == arity)
                .collect();
            if !with_arity.is_empty() {
                candidates = with_arity;
                literal_arity_applied = true;
            }
        },
        ResolutionHint::None => (),
    }

    if !literal_arity_applied {
        let fewest = candidates
            .iter()
            .map(|candidate| candidate.required_count())
            .min()
            .unwrap_or_default();
        candidates.retain(|candidate| candidate.required_count() == fewest);
    }

    if candidates.len() > 1 {
        if let Some(candidate) = candidates
            .iter()
            .copied()
            .find(|candidate| candidate.has_variadic())
        {
            return Ok(candidate);
        }
        if let Some(candidate) = candidates.iter().copied().find(|candidate| {
            matches!(candidate.params.as_slice(), [param] if param.optional)
        }) {
            return Ok(candidate);
        }
    }
    Ok(candidates[0])
}

fn compare_candidates(a: &BuilderSpec, b: &BuilderSpec) -> Ordering {
    a.name
        .cmp(&b.name)
        .then(a.params.len().cmp(&b.params.len()))
        .then_with(|| {
            a.params
                .iter()
                .map(|param| param.name.as_str())
                .cmp(b.params.iter().map(|param| param.name.as_str()))
        })
}
