//! Card title canonicalization.
//!
//! Retailers append set and finish qualifiers to product titles, either
//! parenthesized ("Lightning Bolt (Foil)") or behind a dash separator
//! ("Lightning Bolt - Masters Edition"). Canonicalization strips both so
//! titles become comparable to plain card names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any parenthesized segment, wherever it appears
    static ref PAREN_RE: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();
    /// A dash separator and everything after it. The dash must follow
    /// whitespace so hyphenated card names survive.
    static ref DASH_SUFFIX_RE: Regex = Regex::new(r"\s-\s.*$").unwrap();
}

/// Reduce a raw product title to its comparable card name.
///
/// Idempotent: a canonical title passes through unchanged.
pub fn canonicalize(raw_title: &str) -> String {
    let without_parens = PAREN_RE.replace_all(raw_title, "");
    let without_suffix = DASH_SUFFIX_RE.replace(&without_parens, "");
    without_suffix.trim().to_string()
}

/// Case-insensitive equality on canonicalized forms.
///
/// This is the system's sole search-relevance check; there is no fuzzy
/// matching or ranking. Folding is Unicode-aware so accented card names
/// ("Juzám Djinn", "Lim-Dûl") match regardless of case.
pub fn names_match(a: &str, b: &str) -> bool {
    canonicalize(a).to_lowercase() == canonicalize(b).to_lowercase()
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;
