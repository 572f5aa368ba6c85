use serde::{Deserialize, Serialize};

use crate::retailer::RetailerId;

/// Card condition grades shared across all retailers.
///
/// Retailer-native condition text is mapped into this enum by the
/// per-retailer vocabulary tables in [`crate::retailer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCondition {
    /// Near Mint
    NM,
    /// Slightly Played
    SP,
    /// Moderately Played
    MP,
    /// Heavily Played
    HP,
    /// Generic "played" when the retailer gives no finer grade
    PLAYED,
    /// Condition not specified or not recognized
    UNKNOWN,
}

impl CardCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardCondition::NM => "NM",
            CardCondition::SP => "SP",
            CardCondition::MP => "MP",
            CardCondition::HP => "HP",
            CardCondition::PLAYED => "PLAYED",
            CardCondition::UNKNOWN => "UNKNOWN",
        }
    }
}

/// Raw listing as extracted by a source adapter, before normalization.
///
/// Field contents are retailer-native: `title` may carry set and finish
/// qualifiers, `condition` uses the retailer's own vocabulary, `stock`
/// may be a count or a phrase like "Out of Stock". A `RawListing` only
/// lives for the duration of one normalization call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    pub title: String,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub set: Option<String>,
    /// Explicit foil signal from the source, if it provides one.
    /// When absent, foil is inferred from the title text.
    #[serde(default)]
    pub foil: Option<bool>,
    #[serde(default)]
    pub stock: Option<String>,
    pub price: String,
    #[serde(default)]
    pub link: Option<String>,
    pub retailer: RetailerId,
}

/// Canonical listing, the unit everything downstream operates on.
///
/// Immutable once constructed by the normalizer; filtering and
/// aggregation only select or reject, never mutate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardListing {
    pub card_name: String,
    pub card_set: String,
    pub condition: CardCondition,
    pub is_foil: bool,
    pub retailer: RetailerId,
    pub stock: u32,
    pub price: f64,
    /// Descriptive frame/print tags ("showcase", "borderless", ...),
    /// in the fixed keyword order, possibly empty.
    pub variant_tags: Vec<String>,
    /// Link to the listing, or to the originating search if the source
    /// exposes no per-item link.
    pub link: String,
}

/// Result of the deck cost minimization over a pool of listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCostResult {
    /// Sum of per-name minimum prices, rounded to 2 decimal places.
    pub total_cost: f64,
    /// One listing per distinct card name, the cheapest in its group.
    pub selected_listings: Vec<serde_json::Value>,
    pub unique_card_count: usize,
    pub total_listings_processed: usize,
    /// Same count under its legacy wire name; older clients read this.
    pub total_cards_processed: usize,
    /// Malformed input entries discarded during grouping.
    pub skipped_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_listing_deserialize_minimal() {
        let json = r#"{
            "title": "Lightning Bolt",
            "price": "$0.50",
            "retailer": "WIZ"
        }"#;

        let raw: RawListing = serde_json::from_str(json).unwrap();
        assert_eq!(raw.title, "Lightning Bolt");
        assert_eq!(raw.retailer, RetailerId::Wiz);
        assert!(raw.condition.is_none());
        assert!(raw.foil.is_none());
        assert!(raw.stock.is_none());
        assert!(raw.link.is_none());
    }

    #[test]
    fn test_card_listing_wire_field_names() {
        let listing = CardListing {
            card_name: "Sol Ring".to_string(),
            card_set: "Commander 2021".to_string(),
            condition: CardCondition::NM,
            is_foil: false,
            retailer: RetailerId::F2F,
            stock: 3,
            price: 3.25,
            variant_tags: vec!["borderless".to_string()],
            link: "https://example.com/sol-ring".to_string(),
        };

        let json = serde_json::to_string(&listing).unwrap();
        assert!(json.contains("\"card_name\":\"Sol Ring\""));
        assert!(json.contains("\"is_foil\":false"));
        assert!(json.contains("\"condition\":\"NM\""));
        assert!(json.contains("\"retailer\":\"F2F\""));
    }

    #[test]
    fn test_deck_cost_result_camel_case() {
        let result = DeckCostResult {
            total_cost: 3.75,
            selected_listings: vec![],
            unique_card_count: 2,
            total_listings_processed: 3,
            total_cards_processed: 3,
            skipped_count: 0,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"totalCost\":3.75"));
        assert!(json.contains("\"uniqueCardCount\":2"));
        assert!(json.contains("\"totalCardsProcessed\":3"));
        assert!(json.contains("\"skippedCount\":0"));
    }
}
