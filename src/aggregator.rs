//! Fan-out orchestration across retailer sources.
//!
//! One query fans out to every enabled adapter concurrently; a failing
//! adapter degrades to an empty contribution and never poisons the
//! others. Batch runs iterate queries sequentially so the number of
//! simultaneous outbound calls stays bounded by the retailer count.

use std::sync::Arc;

use futures::future::join_all;

use crate::adapters::SourceAdapter;
use crate::config::ScoutConfig;
use crate::filter::passes_filter;
use crate::models::CardListing;
use crate::normalize::{normalize, NormalizeOutcome};

/// Orchestrates searches across a fixed set of source adapters.
pub struct Aggregator {
    adapters: Vec<Arc<dyn SourceAdapter>>,
}

impl Aggregator {
    pub fn new(adapters: Vec<Arc<dyn SourceAdapter>>) -> Self {
        Aggregator { adapters }
    }

    /// Adapters registered with this aggregator
    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }

    /// Search all enabled retailers for one card name.
    ///
    /// Adapter calls run concurrently and are joined before returning;
    /// a per-adapter failure is logged and contributes nothing. The
    /// cross-retailer order of the merged output is unspecified.
    pub async fn search(&self, query: &str, config: &ScoutConfig) -> Vec<CardListing> {
        let enabled: Vec<&Arc<dyn SourceAdapter>> = self
            .adapters
            .iter()
            .filter(|adapter| config.is_enabled(adapter.retailer()))
            .collect();

        log::info!(
            "Searching {} retailer(s) for {:?}",
            enabled.len(),
            query
        );

        let calls = enabled.iter().map(|adapter| async move {
            let outcome = adapter.fetch_listings(query, config).await;
            (adapter.retailer(), adapter.search_url(query), outcome)
        });
        let settled = join_all(calls).await;

        let mut merged = Vec::new();
        for (retailer, search_url, outcome) in settled {
            let raws = match outcome {
                Ok(raws) => raws,
                Err(e) => {
                    // Isolated failure: this retailer contributes nothing
                    log::warn!("[{}] Source failed, skipping: {}", retailer, e);
                    continue;
                }
            };

            let mut kept = 0usize;
            for raw in &raws {
                match normalize(raw, query, &search_url) {
                    NormalizeOutcome::Listing(listing) => {
                        if passes_filter(&listing, config) {
                            merged.push(listing);
                            kept += 1;
                        }
                    }
                    NormalizeOutcome::NotRelevant => {}
                    NormalizeOutcome::Malformed => {
                        log::debug!("[{}] Skipped malformed listing", retailer);
                    }
                }
            }
            log::debug!(
                "[{}] {} of {} raw listings kept for {:?}",
                retailer,
                kept,
                raws.len(),
                query
            );
        }

        log::info!("Total results for {:?}: {}", query, merged.len());
        merged
    }

    /// Search a list of card names, one query at a time.
    ///
    /// Queries run strictly in order; each query's fan-out completes
    /// before the next begins. Results are concatenated.
    pub async fn search_all(&self, queries: &[String], config: &ScoutConfig) -> Vec<CardListing> {
        let mut all = Vec::new();
        for query in queries {
            log::info!("Batch search: processing {:?}", query);
            let mut results = self.search(query, config).await;
            all.append(&mut results);
        }
        log::info!(
            "Batch search completed: {} listings for {} queries",
            all.len(),
            queries.len()
        );
        all
    }
}
