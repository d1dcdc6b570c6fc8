use crate::config::FeedConfig;
use crate::fetch::HttpFetcher;
use crate::orchestrator::{FetchOrchestrator, FetchOutcome};
use crate::query;
use async_trait::async_trait;
use mixfeed_core::{Article, Result};
use std::sync::Arc;

/// Pre-flight network check, answered by the embedding platform before the
/// feed is requested at all.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_online(&self) -> bool;
}

/// What the presentation layer should show after a refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    /// No network path; the feed was not requested.
    Offline,
    /// The fetch ran but produced nothing to show, whether the feed was
    /// empty or the request failed.
    NoArticles,
    Loaded(Vec<Article>),
}

/// Ties the pieces together the way the reference screen does: consult
/// connectivity, build the URL from config and sort preference, run one
/// fetch, and map the outcome to a displayable state.
pub struct FeedController {
    config: FeedConfig,
    orchestrator: FetchOrchestrator,
    connectivity: Arc<dyn Connectivity>,
}

impl FeedController {
    pub fn new(config: FeedConfig, connectivity: Arc<dyn Connectivity>) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self {
            config,
            orchestrator: FetchOrchestrator::new(fetcher),
            connectivity,
        })
    }

    pub async fn refresh(&self) -> FeedState {
        if !self.connectivity.is_online().await {
            tracing::info!("offline, skipping feed request");
            return FeedState::Offline;
        }

        let url = query::feed_url(&self.config.endpoint, self.config.order, &self.config.api_key);
        match self.orchestrator.run(&url).await {
            FetchOutcome::Fetched(articles) => FeedState::Loaded(articles),
            FetchOutcome::Empty | FetchOutcome::Failed(_) => FeedState::NoArticles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixfeed_core::SortOrder;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct AlwaysOnline;
    struct AlwaysOffline;

    #[async_trait]
    impl Connectivity for AlwaysOnline {
        async fn is_online(&self) -> bool {
            true
        }
    }

    #[async_trait]
    impl Connectivity for AlwaysOffline {
        async fn is_online(&self) -> bool {
            false
        }
    }

    fn config_for(server: &MockServer) -> FeedConfig {
        FeedConfig {
            endpoint: format!("{}/feed", server.uri()),
            api_key: "test-key".to_string(),
            ..FeedConfig::default()
        }
    }

    #[tokio::test]
    async fn offline_short_circuits_without_a_request() {
        let server = MockServer::start().await;
        // No mock mounted: any request would return 404 and still map to
        // NoArticles, so assert on received requests instead.
        let controller = FeedController::new(config_for(&server), Arc::new(AlwaysOffline)).unwrap();
        assert_eq!(controller.refresh().await, FeedState::Offline);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn online_refresh_passes_order_and_key_through() {
        let server = MockServer::start().await;
        let body = json!({
            "response": { "leadContent": [ {
                "webTitle": "negroni",
                "webPublicationDate": "2018-05-04T11:30:00Z",
                "webUrl": "https://example.com/negroni",
                "fields": { "byline": "Tina Taylor" },
                "blocks": { "body": [ { "bodyTextSummary": "summary" } ] }
            } ] }
        })
        .to_string();
        Mock::given(method("GET"))
            .and(query_param("order-by", "oldest"))
            .and(query_param("api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let config = FeedConfig {
            order: SortOrder::Oldest,
            ..config_for(&server)
        };
        let controller = FeedController::new(config, Arc::new(AlwaysOnline)).unwrap();
        match controller.refresh().await {
            FeedState::Loaded(articles) => assert_eq!(articles[0].title, "negroni"),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failed_fetch_shows_no_articles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let controller = FeedController::new(config_for(&server), Arc::new(AlwaysOnline)).unwrap();
        assert_eq!(controller.refresh().await, FeedState::NoArticles);
    }
}
