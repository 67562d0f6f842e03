use serde::Serialize;

use crate::domain::{EchoRoute, ErrorDetail, ErrorLayout, QueryParams};

// Message carried by every 500 envelope.
pub const INTERNAL_ERROR_MSG: &str = "Internal Server Error";

// Success body: the route label and the echoed query.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope {
    pub route: &'static str,
    pub query: QueryParams,
}

// Error body. Where the route label sits depends on the route's layout.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<&'static str>,
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<&'static str>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorEnvelope {
    // Single-entry envelope for an internal failure.
    pub fn internal(route: &EchoRoute, message: impl Into<String>) -> Self {
        Self::from_details(
            route,
            vec![ErrorDetail::new(INTERNAL_ERROR_MSG).with_error(message)],
        )
    }

    pub fn from_details(route: &EchoRoute, details: Vec<ErrorDetail>) -> Self {
        let nested = route.error_layout == ErrorLayout::Nested;
        let errors = details
            .into_iter()
            .map(|detail| ErrorEntry {
                route: nested.then_some(route.label),
                msg: detail.msg,
                error: detail.error,
            })
            .collect();

        Self {
            route: (!nested).then_some(route.label),
            errors,
        }
    }
}
