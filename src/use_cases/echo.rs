use async_trait::async_trait;

use crate::domain::{EchoRoute, ProcessError, QueryParams, QueryProcessor};

// Result of a successful echo: the route it ran for and the query to return.
#[derive(Debug)]
pub struct EchoOutcome {
    pub route: EchoRoute,
    pub query: QueryParams,
}

// Echo use case with the processing step injected.
pub struct EchoQueryUseCase<'a, P: ?Sized> {
    pub processor: &'a P,
    pub route: EchoRoute,
}

impl<P> EchoQueryUseCase<'_, P>
where
    P: QueryProcessor + ?Sized,
{
    pub async fn execute(&self, query: QueryParams) -> Result<EchoOutcome, ProcessError> {
        let query = self.processor.process(&self.route, query).await?;

        Ok(EchoOutcome {
            route: self.route,
            query,
        })
    }
}

// Production processing step: hands the query back untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

#[async_trait]
impl QueryProcessor for Passthrough {
    async fn process(
        &self,
        _route: &EchoRoute,
        query: QueryParams,
    ) -> Result<QueryParams, ProcessError> {
        Ok(query)
    }
}
