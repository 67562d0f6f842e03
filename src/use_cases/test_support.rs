use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{EchoRoute, ErrorDetail, ProcessError, QueryParams, QueryProcessor};

// Processing step that always fails with the given message.
pub(crate) struct FailingProcessor(pub(crate) String);

#[async_trait]
impl QueryProcessor for FailingProcessor {
    async fn process(
        &self,
        _route: &EchoRoute,
        _query: QueryParams,
    ) -> Result<QueryParams, ProcessError> {
        Err(ProcessError::Internal(self.0.clone()))
    }
}

// Processing step that refuses every query with fixed details.
pub(crate) struct RejectingProcessor(pub(crate) Vec<ErrorDetail>);

#[async_trait]
impl QueryProcessor for RejectingProcessor {
    async fn process(
        &self,
        _route: &EchoRoute,
        _query: QueryParams,
    ) -> Result<QueryParams, ProcessError> {
        Err(ProcessError::Rejected(self.0.clone()))
    }
}

// Processing step that panics mid-request.
pub(crate) struct PanickingProcessor(pub(crate) &'static str);

#[async_trait]
impl QueryProcessor for PanickingProcessor {
    async fn process(
        &self,
        _route: &EchoRoute,
        _query: QueryParams,
    ) -> Result<QueryParams, ProcessError> {
        panic!("{}", self.0)
    }
}

pub(crate) type CallLog = Arc<Mutex<Vec<(&'static str, QueryParams)>>>;

// Pass-through step that records every call by route label.
#[derive(Clone)]
pub(crate) struct RecordingProcessor {
    calls: CallLog,
}

impl RecordingProcessor {
    pub(crate) fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(&'static str, QueryParams)> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl QueryProcessor for RecordingProcessor {
    async fn process(
        &self,
        route: &EchoRoute,
        query: QueryParams,
    ) -> Result<QueryParams, ProcessError> {
        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push((route.label, query.clone()));
        Ok(query)
    }
}
