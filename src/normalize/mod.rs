//! Listing normalization.
//!
//! Turns a retailer-native [`RawListing`] into a canonical
//! [`CardListing`], composing title canonicalization, the retailer's
//! condition vocabulary, variant tagging and price/stock parsing.

pub mod title;
pub mod variants;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{CardListing, RawListing};
pub use title::{canonicalize, names_match};
pub use variants::extract_variant_tags;

/// Sentinel set label when the source gives none
const UNKNOWN_SET: &str = "Unknown";

/// Outcome of normalizing one raw listing.
///
/// Rejections are typed rather than logged-and-dropped so callers can
/// count and test them.
#[derive(Debug, Clone)]
pub enum NormalizeOutcome {
    /// The raw listing normalized cleanly
    Listing(CardListing),
    /// The canonical title does not match the query (or the retailer
    /// categorically excludes the title, e.g. WIZ Art Series products)
    NotRelevant,
    /// Price (or another required field) failed to parse
    Malformed,
}

lazy_static! {
    static ref DIGITS_RE: Regex = Regex::new(r"(\d+)").unwrap();
}

/// Parse retailer price text ("CAD$ 4.50", "$0.50 ea") to a decimal.
///
/// Strips everything except digits and decimal points before parsing.
pub fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
}

/// Parse retailer stock text to a count.
///
/// Numeric text wins; boolean "in stock"/"out of stock" phrases map to
/// 1/0; anything else falls back to the retailer's unknown-stock policy.
fn parse_stock(text: Option<&str>, unknown_stock_count: u32) -> u32 {
    let Some(text) = text else {
        return unknown_stock_count;
    };
    let lower = text.to_lowercase();
    if lower.contains("out of stock") {
        return 0;
    }
    if let Some(captures) = DIGITS_RE.captures(&lower) {
        if let Ok(count) = captures[1].parse::<u32>() {
            return count;
        }
    }
    if lower.contains("in stock") {
        return 1;
    }
    unknown_stock_count
}

/// Normalize one raw listing against the query that produced it.
///
/// `fallback_link` is the originating search URL, used when the source
/// exposes no per-item link.
pub fn normalize(raw: &RawListing, query: &str, fallback_link: &str) -> NormalizeOutcome {
    let profile = raw.retailer.profile();

    if profile.denies_title(&raw.title) {
        return NormalizeOutcome::NotRelevant;
    }

    let card_name = canonicalize(&raw.title);
    if !title::names_match(&card_name, query) {
        return NormalizeOutcome::NotRelevant;
    }

    let Some(price) = parse_price(&raw.price) else {
        log::debug!(
            "[{}] Discarding malformed price {:?} for {:?}",
            raw.retailer,
            raw.price,
            raw.title
        );
        return NormalizeOutcome::Malformed;
    };

    // Explicit foil signals are trusted first; title text is the fallback
    let is_foil = raw
        .foil
        .unwrap_or_else(|| raw.title.to_lowercase().contains("foil"));

    let card_set = match raw.set.as_deref() {
        Some(set) if !set.trim().is_empty() => profile.clean_set(set),
        _ => UNKNOWN_SET.to_string(),
    };

    NormalizeOutcome::Listing(CardListing {
        card_name,
        card_set,
        condition: profile.map_condition(raw.condition.as_deref()),
        is_foil,
        retailer: raw.retailer,
        stock: parse_stock(raw.stock.as_deref(), profile.unknown_stock_count),
        price,
        variant_tags: extract_variant_tags(&raw.title),
        link: raw
            .link
            .clone()
            .unwrap_or_else(|| fallback_link.to_string()),
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
