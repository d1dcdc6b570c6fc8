use mixfeed_core::SortOrder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Feed endpoint and request behavior.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base feed endpoint, without query parameters
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Static API credential, appended as the `api-key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Sort order requested from the feed (default: newest)
    #[serde(default)]
    pub order: SortOrder,

    /// TCP connect timeout (default: 15s)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,

    /// Time allowed for the full response to arrive (default: 10s)
    #[serde(default = "default_read_timeout")]
    pub read_timeout: Duration,
}

fn default_endpoint() -> String {
    "https://content.guardianapis.com/lifeandstyle/series/the-good-mixer".to_string()
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(15)
}

fn default_read_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            order: SortOrder::default(),
            connect_timeout: default_connect_timeout(),
            read_timeout: default_read_timeout(),
        }
    }
}
