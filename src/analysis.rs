//! Deck cost minimization over a pool of listings.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::DeckCostResult;

/// Compute the cheapest way to acquire one copy of every distinct card
/// name in the pool.
///
/// Input entries are loosely typed JSON (they arrive straight from the
/// HTTP surface); an entry without a string `card_name` or a numeric
/// `price` is skipped and counted, never an error. Within a name group
/// the strictly cheapest listing wins; at equal minimum price the first
/// encountered entry is kept, which across retailers depends on
/// settlement order and is deliberately left unspecified.
pub fn calculate_deck_cost(listings: &[Value]) -> DeckCostResult {
    let mut cheapest_by_name: HashMap<String, &Value> = HashMap::new();
    // Insertion order of the grouping map, for stable output
    let mut name_order: Vec<String> = Vec::new();
    let mut skipped = 0usize;

    for entry in listings {
        let (Some(name), Some(price)) = (entry_name(entry), entry_price(entry)) else {
            log::debug!("Skipping malformed deck entry: {}", entry);
            skipped += 1;
            continue;
        };

        match cheapest_by_name.get(&name) {
            Some(current) => {
                // Strictly-lower only: ties keep the first encountered
                if price < entry_price(current).unwrap_or(f64::INFINITY) {
                    cheapest_by_name.insert(name, entry);
                }
            }
            None => {
                name_order.push(name.clone());
                cheapest_by_name.insert(name, entry);
            }
        }
    }

    let selected: Vec<Value> = name_order
        .iter()
        .filter_map(|name| cheapest_by_name.get(name).map(|v| (*v).clone()))
        .collect();

    let total: f64 = selected
        .iter()
        .filter_map(|entry| entry_price(entry))
        .sum();

    DeckCostResult {
        total_cost: round2(total),
        unique_card_count: selected.len(),
        total_listings_processed: listings.len(),
        total_cards_processed: listings.len(),
        skipped_count: skipped,
        selected_listings: selected,
    }
}

fn entry_name(entry: &Value) -> Option<String> {
    entry
        .get("card_name")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn entry_price(entry: &Value) -> Option<f64> {
    entry.get("price").and_then(Value::as_f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
