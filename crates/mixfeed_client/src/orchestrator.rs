use crate::fetch::HttpFetcher;
use crate::parse;
use mixfeed_core::{Article, Error};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Outcome of one fetch-and-parse pass. The failure channel stays
/// distinguishable here; presentation layers that want the reference
/// behavior collapse it with [`FetchOutcome::into_articles`].
#[derive(Debug)]
pub enum FetchOutcome {
    Fetched(Vec<Article>),
    Empty,
    Failed(Error),
}

impl FetchOutcome {
    /// Collapse to the bare list the presentation layer renders. After this
    /// a failed fetch is indistinguishable from a feed with zero items.
    pub fn into_articles(self) -> Vec<Article> {
        match self {
            FetchOutcome::Fetched(articles) => articles,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

/// Sequences fetch then parse for a single request URL. Single-shot: no
/// state survives between invocations, no cancellation mid-flight; a timeout
/// is the only way an in-flight fetch terminates early.
pub struct FetchOrchestrator {
    fetcher: HttpFetcher,
}

impl FetchOrchestrator {
    pub fn new(fetcher: HttpFetcher) -> Self {
        Self { fetcher }
    }

    /// One fetch end-to-end. The body, or its absence on a fetch failure, is
    /// handed to the parser either way; the specific cause of a failure is
    /// logged here and not surfaced past the outcome.
    pub async fn run(&self, url: &str) -> FetchOutcome {
        let (body, fetch_err) = match self.fetcher.fetch(url).await {
            Ok(body) => (Some(body), None),
            Err(err) => {
                tracing::warn!(url, error = %err, "feed request failed");
                (None, Some(err))
            }
        };

        match parse::parse_feed(body.as_deref()) {
            Ok(articles) => {
                if let Some(err) = fetch_err {
                    return FetchOutcome::Failed(err);
                }
                if articles.is_empty() {
                    FetchOutcome::Empty
                } else {
                    tracing::info!(count = articles.len(), "feed fetched");
                    FetchOutcome::Fetched(articles)
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "feed payload rejected");
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Run the fetch as its own task so the caller's rendering thread never
    /// blocks on network I/O. The handle delivers exactly one outcome.
    pub fn spawn(self: Arc<Self>, url: String) -> JoinHandle<FetchOutcome> {
        tokio::spawn(async move { self.run(&url).await })
    }
}
