//! Card Scout - MTG singles aggregator
//!
//! Reconciles listings from several retailer sources into one canonical
//! schema, applies configurable inclusion rules, and computes the
//! minimum cost of acquiring a distinct set of cards.

pub mod adapters;
pub mod aggregator;
pub mod analysis;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod retailer;
pub mod web;

// Re-export commonly used items
pub use adapters::{RemoteAdapter, SourceAdapter};
pub use aggregator::Aggregator;
pub use analysis::calculate_deck_cost;
pub use config::{ConfigPatch, ScoutConfig};
pub use error::{Result, ScoutError};
pub use filter::passes_filter;
pub use models::{CardCondition, CardListing, DeckCostResult, RawListing};
pub use normalize::{canonicalize, extract_variant_tags, normalize, NormalizeOutcome};
pub use retailer::{RetailerId, RetailerProfile};
