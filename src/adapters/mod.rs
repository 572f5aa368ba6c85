//! Source adapters: the seam between the aggregation core and whatever
//! actually talks to a retailer.
//!
//! An adapter's only contract is "produce raw listings for a query".
//! Page rendering, selector probing and retries all live behind this
//! trait, outside the core.

pub mod remote;

use async_trait::async_trait;

use crate::config::ScoutConfig;
use crate::error::Result;
use crate::models::RawListing;
use crate::retailer::RetailerId;

pub use remote::RemoteAdapter;

/// One retailer's listing source.
///
/// Implementations must tag every produced record with their own
/// retailer identifier and must not panic; any internal failure comes
/// back as an `Err`, which the orchestrator isolates per retailer.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// The retailer this adapter serves
    fn retailer(&self) -> RetailerId;

    /// The originating search URL for a query, used as the listing link
    /// of last resort
    fn search_url(&self, query: &str) -> String;

    /// Fetch raw listings for a query under the given config snapshot
    async fn fetch_listings(&self, query: &str, config: &ScoutConfig) -> Result<Vec<RawListing>>;
}
