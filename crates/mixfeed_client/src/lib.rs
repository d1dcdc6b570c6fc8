pub mod config;
pub mod controller;
pub mod fetch;
pub mod logging;
pub mod orchestrator;
pub mod parse;
pub mod query;

pub use config::FeedConfig;
pub use controller::{Connectivity, FeedController, FeedState};
pub use fetch::HttpFetcher;
pub use logging::init_logging;
pub use orchestrator::{FetchOrchestrator, FetchOutcome};

pub mod prelude {
    pub use super::config::FeedConfig;
    pub use super::controller::{Connectivity, FeedController, FeedState};
    pub use super::orchestrator::{FetchOrchestrator, FetchOutcome};
    pub use mixfeed_core::{display_date, Article, Error, Result, SortOrder};
}
