//! Typo-tolerant name resolution
//!
//! Input is matched against catalog names by Levenshtein distance:
//!
//! 1. The first name (in catalog order) within [`EXACT_TOLERANCE`] edits is
//!    accepted. Order decides ties, not distance: an exact match that appears
//!    after a one-edit match is never preferred.
//! 2. Otherwise every name within [`SUGGESTION_TOLERANCE`] edits is returned as
//!    a suggestion in an [`ResolveError::AmbiguousName`].
//! 3. Otherwise the input is [`ResolveError::NotFound`].
//!
//! Each call is a linear scan computing one edit distance per catalog name,
//! so this only suits small catalogs (hundreds to low thousands of entries).

use tracing::debug;

use crate::ResolveError;

/// Edits accepted as a plain typo
pub const EXACT_TOLERANCE: usize = 1;

/// Edits within which a name is offered as a suggestion
pub const SUGGESTION_TOLERANCE: usize = 2;

/// Resolve `raw_input` against lowercase `candidates`, returning the matched
/// candidate
pub fn resolve<S: AsRef<str>>(raw_input: &str, candidates: &[S]) -> Result<String, ResolveError> {
    let input = raw_input.to_lowercase();

    if let Some(found) = candidates
        .iter()
        .map(AsRef::as_ref)
        .find(|name| strsim::levenshtein(&input, name) <= EXACT_TOLERANCE)
    {
        if found != input {
            debug!(input = raw_input, resolved = found, "Corrected creature name");
        }
        return Ok(found.to_string());
    }

    let suggestions: Vec<String> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| strsim::levenshtein(&input, name) <= SUGGESTION_TOLERANCE)
        .map(str::to_string)
        .collect();

    if suggestions.is_empty() {
        Err(ResolveError::NotFound {
            kind: "creature",
            input: raw_input.to_string(),
        })
    } else {
        Err(ResolveError::AmbiguousName {
            input: raw_input.to_string(),
            suggestions,
        })
    }
}
