//! Retailer identifiers and per-retailer normalization tables.
//!
//! Condition vocabularies, unknown-stock policy and title exclusions are
//! retailer-specific and drift independently, so each retailer owns its
//! own table here instead of spreading the mapping across the adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::CardCondition;

/// The retailers known to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RetailerId {
    #[serde(rename = "F2F")]
    F2F,
    #[serde(rename = "WIZ")]
    Wiz,
    #[serde(rename = "401G")]
    Games401,
}

impl RetailerId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetailerId::F2F => "F2F",
            RetailerId::Wiz => "WIZ",
            RetailerId::Games401 => "401G",
        }
    }

    /// Parse a retailer identifier (e.g. "F2F", "wiz")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "F2F" => Some(RetailerId::F2F),
            "WIZ" => Some(RetailerId::Wiz),
            "401G" | "401" => Some(RetailerId::Games401),
            _ => None,
        }
    }

    /// Returns all known retailers
    pub fn all() -> &'static [RetailerId] {
        &[RetailerId::F2F, RetailerId::Wiz, RetailerId::Games401]
    }

    /// The normalization table for this retailer
    pub fn profile(&self) -> &'static RetailerProfile {
        match self {
            RetailerId::F2F => &F2F_PROFILE,
            RetailerId::Wiz => &WIZ_PROFILE,
            RetailerId::Games401 => &G401_PROFILE,
        }
    }
}

impl fmt::Display for RetailerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a vocabulary pattern matches the raw condition text
#[derive(Debug, Clone, Copy)]
enum VocabMatch {
    /// The whole text equals the pattern (case-insensitive)
    Exact,
    /// The text contains the pattern as a substring (case-insensitive)
    Substring,
}

/// One entry of a retailer's condition vocabulary
struct VocabEntry {
    pattern: &'static str,
    matches: VocabMatch,
    condition: CardCondition,
}

/// Per-retailer normalization table.
///
/// First matching vocabulary entry wins; entries are checked in
/// declaration order. Extending a vocabulary means adding entries,
/// not changing the mapper.
pub struct RetailerProfile {
    pub id: RetailerId,
    vocabulary: &'static [VocabEntry],
    /// Stock count assumed when the source gives no stock signal at all.
    /// F2F lists only what it stocks, so absence means one copy; the
    /// other retailers mark everything, so absence means unavailable.
    pub unknown_stock_count: u32,
    /// Lower-cased substrings that disqualify a title outright
    /// (e.g. WIZ "Art Series" proxy products).
    title_deny: &'static [&'static str],
    /// Lower-cased category noise removed from set labels.
    set_noise: &'static [&'static str],
}

impl RetailerProfile {
    /// Map retailer-native condition text to the shared enum.
    ///
    /// Total: unrecognized or absent text maps to `UNKNOWN`.
    pub fn map_condition(&self, raw: Option<&str>) -> CardCondition {
        let Some(raw) = raw else {
            return CardCondition::UNKNOWN;
        };
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return CardCondition::UNKNOWN;
        }
        for entry in self.vocabulary {
            let hit = match entry.matches {
                VocabMatch::Exact => text == entry.pattern,
                VocabMatch::Substring => text.contains(entry.pattern),
            };
            if hit {
                return entry.condition;
            }
        }
        CardCondition::UNKNOWN
    }

    /// True if the title is categorically excluded for this retailer
    pub fn denies_title(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.title_deny.iter().any(|deny| lower.contains(deny))
    }

    /// Clean a raw set/category label, stripping retailer category noise
    pub fn clean_set(&self, raw: &str) -> String {
        let mut text = raw.trim().to_string();
        for noise in self.set_noise {
            // ASCII lowering keeps byte offsets valid for the original text
            let lower = text.to_ascii_lowercase();
            if let Some(pos) = lower.find(noise) {
                text.replace_range(pos..pos + noise.len(), "");
            }
        }
        text.trim().trim_start_matches('-').trim().to_string()
    }
}

/// F2F reports two-letter grade codes; "PL" is their generic played
/// grade, closest to MP.
static F2F_PROFILE: RetailerProfile = RetailerProfile {
    id: RetailerId::F2F,
    vocabulary: &[
        VocabEntry {
            pattern: "nm",
            matches: VocabMatch::Exact,
            condition: CardCondition::NM,
        },
        VocabEntry {
            pattern: "sp",
            matches: VocabMatch::Exact,
            condition: CardCondition::SP,
        },
        VocabEntry {
            pattern: "pl",
            matches: VocabMatch::Exact,
            condition: CardCondition::MP,
        },
        VocabEntry {
            pattern: "hp",
            matches: VocabMatch::Exact,
            condition: CardCondition::HP,
        },
    ],
    unknown_stock_count: 1,
    title_deny: &[],
    set_noise: &[],
};

/// WIZ reports free-text grade phrases inside variant descriptions.
static WIZ_PROFILE: RetailerProfile = RetailerProfile {
    id: RetailerId::Wiz,
    vocabulary: &[
        VocabEntry {
            pattern: "near mint",
            matches: VocabMatch::Substring,
            condition: CardCondition::NM,
        },
        VocabEntry {
            pattern: "nm",
            matches: VocabMatch::Substring,
            condition: CardCondition::NM,
        },
        VocabEntry {
            pattern: "slightly played",
            matches: VocabMatch::Substring,
            condition: CardCondition::SP,
        },
        VocabEntry {
            pattern: "moderately played",
            matches: VocabMatch::Substring,
            condition: CardCondition::MP,
        },
        VocabEntry {
            pattern: "heavily played",
            matches: VocabMatch::Substring,
            condition: CardCondition::HP,
        },
    ],
    unknown_stock_count: 0,
    title_deny: &["- art series"],
    set_noise: &[],
};

/// 401G does not expose condition on search results at all.
static G401_PROFILE: RetailerProfile = RetailerProfile {
    id: RetailerId::Games401,
    vocabulary: &[],
    unknown_stock_count: 0,
    title_deny: &[],
    set_noise: &["magic: the gathering singles"],
};

#[cfg(test)]
#[path = "retailer_tests.rs"]
mod tests;
