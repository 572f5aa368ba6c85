//! Configuration-driven inclusion rules for canonical listings.

use crate::config::ScoutConfig;
use crate::models::CardListing;

/// True if the listing survives the config's inclusion rules.
///
/// Stateless and order-independent: a foil listing needs `allowFoil`,
/// a zero-stock listing needs `allowOutOfStock`, and both rules must
/// pass.
pub fn passes_filter(listing: &CardListing, config: &ScoutConfig) -> bool {
    if listing.is_foil && !config.allow_foil {
        return false;
    }
    if listing.stock == 0 && !config.allow_out_of_stock {
        return false;
    }
    true
}
