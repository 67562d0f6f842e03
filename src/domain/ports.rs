use async_trait::async_trait;

use crate::domain::errors::ProcessError;
use crate::domain::query::QueryParams;
use crate::domain::route::EchoRoute;

// Port for the per-request processing step behind every echo endpoint.
#[async_trait]
pub trait QueryProcessor: Send + Sync {
    async fn process(
        &self,
        route: &EchoRoute,
        query: QueryParams,
    ) -> Result<QueryParams, ProcessError>;
}

// Port for the external search service. Only reachability is exposed; the
// endpoints hold it but do not query it.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    async fn ping(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
