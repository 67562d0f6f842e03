use crate::domain::SearchIndex;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;
use url::Url;

// Thin reqwest client for the search service.
#[derive(Clone)]
pub struct ElasticClient {
    http: reqwest::Client,
    base_url: Url,
}

#[derive(Debug)]
pub enum SearchClientError {
    Transport(reqwest::Error),
    Upstream { status: StatusCode },
}

impl fmt::Display for SearchClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchClientError::Transport(err) => write!(f, "search transport error: {err}"),
            SearchClientError::Upstream { status } => write!(f, "search upstream error {status}"),
        }
    }
}

impl std::error::Error for SearchClientError {}

impl ElasticClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl SearchIndex for ElasticClient {
    async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // The cluster root answers 200 with its banner when it is up.
        let res = self
            .http
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(SearchClientError::Transport)?;
        let status = res.status();

        if !status.is_success() {
            return Err(Box::new(SearchClientError::Upstream { status }));
        }

        Ok(())
    }
}
