//! Card Scout - MTG singles aggregator
//!
//! Serves the aggregation API, fanning searches out to external scraper
//! services (one per retailer) given as `--adapter RETAILER=URL`.

use std::sync::Arc;

use clap::Parser;

use card_scout::adapters::{RemoteAdapter, SourceAdapter};
use card_scout::retailer::RetailerId;
use card_scout::web::{self, AppState};
use card_scout::{Aggregator, ScoutConfig};

/// MTG singles aggregator - normalizes retailer listings and computes
/// minimum deck cost
#[derive(Parser, Debug)]
#[command(name = "card_scout")]
#[command(version, about, long_about = None)]
struct Args {
    /// Port for the API server
    #[arg(short, long, default_value_t = 3001)]
    port: u16,

    /// Scraper service endpoint per retailer, as RETAILER=URL
    /// (e.g. F2F=http://localhost:4001/listings). Repeatable.
    #[arg(long = "adapter", value_name = "RETAILER=URL")]
    adapters: Vec<String>,
}

fn parse_adapter_arg(arg: &str) -> Option<(RetailerId, String)> {
    let (retailer, url) = arg.split_once('=')?;
    let id = RetailerId::parse(retailer.trim())?;
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    Some((id, url.to_string()))
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut adapters: Vec<Arc<dyn SourceAdapter>> = Vec::new();
    for arg in &args.adapters {
        match parse_adapter_arg(arg) {
            Some((retailer, url)) => {
                log::info!("Registered {} adapter at {}", retailer, url);
                adapters.push(Arc::new(RemoteAdapter::new(retailer, url)));
            }
            None => {
                log::error!("Invalid --adapter value: {:?} (expected RETAILER=URL)", arg);
                std::process::exit(1);
            }
        }
    }

    if adapters.is_empty() {
        log::warn!("No source adapters registered; searches will return no listings");
    }

    let state = AppState::new(ScoutConfig::default(), Arc::new(Aggregator::new(adapters)));

    log::info!("Starting card_scout on port {}", args.port);

    if let Err(e) = web::serve(state, args.port).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
