use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SyntaxError};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static CHILD_COMBINATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s?>\s?").unwrap());
static ILLEGAL_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]$").unwrap());

/// Scans one comma-separated selector entry before the state machine runs.
///
/// The entry is normalized (whitespace runs become single spaces), split on
/// the child-combinator pattern and then on spaces, and every resulting
/// simple-selector token must end in an ASCII letter or digit. This catches
/// dangling `.`, `#`, `:` and trailing combinators early, with a diagnostic
/// quoting the whole entry instead of a single character.
pub(crate) fn check(selector_text: &str) -> Result<()> {
    if selector_text.is_empty() {
        return Err(SyntaxError::TrailingCharacter(selector_text.to_string()));
    }

    let normalized = WHITESPACE_RUN.replace_all(selector_text, " ");
    let has_illegal_tail = CHILD_COMBINATOR
        .split(&normalized)
        .flat_map(|segment| segment.split(' '))
        .any(|token| ILLEGAL_TAIL.is_match(token));

    if has_illegal_tail {
        return Err(SyntaxError::TrailingCharacter(selector_text.to_string()));
    }
    Ok(())
}
