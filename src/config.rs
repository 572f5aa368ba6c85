//! Request-scoped aggregator configuration.
//!
//! The live configuration is held behind a lock by the web layer; every
//! request clones a snapshot at entry and passes it down the call chain,
//! so a concurrent `PUT /api/config` never affects an in-flight search.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::retailer::RetailerId;

/// Inclusion rules and retailer toggles in effect for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutConfig {
    /// Include foil printings in results
    pub allow_foil: bool,
    /// Include listings with zero stock
    pub allow_out_of_stock: bool,
    /// Per-retailer enable flags; a retailer absent from the map is enabled
    #[serde(default)]
    pub retailers: BTreeMap<RetailerId, bool>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        let retailers = RetailerId::all().iter().map(|id| (*id, true)).collect();
        ScoutConfig {
            allow_foil: false,
            allow_out_of_stock: false,
            retailers,
        }
    }
}

impl ScoutConfig {
    /// True if the given retailer participates in searches
    pub fn is_enabled(&self, id: RetailerId) -> bool {
        self.retailers.get(&id).copied().unwrap_or(true)
    }

    /// Merge a partial update into this config, returning the merged value
    pub fn merged(&self, patch: ConfigPatch) -> ScoutConfig {
        let mut next = self.clone();
        if let Some(allow_foil) = patch.allow_foil {
            next.allow_foil = allow_foil;
        }
        if let Some(allow_out_of_stock) = patch.allow_out_of_stock {
            next.allow_out_of_stock = allow_out_of_stock;
        }
        if let Some(retailers) = patch.retailers {
            for (id, enabled) in retailers {
                next.retailers.insert(id, enabled);
            }
        }
        next
    }
}

/// Partial configuration as accepted by `PUT /api/config`.
/// Absent fields leave the current value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    pub allow_foil: Option<bool>,
    pub allow_out_of_stock: Option<bool>,
    pub retailers: Option<BTreeMap<RetailerId, bool>>,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
