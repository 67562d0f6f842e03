use crate::domain::{EchoRoute, ProcessError, QueryParams};
use crate::interface_adapters::protocol::{ErrorEnvelope, SuccessEnvelope};
use crate::interface_adapters::state::AppState;
use crate::use_cases::EchoQueryUseCase;
use axum::{
    Extension, Json,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;
use std::sync::Arc;

// Echo the request's query string back inside the route's envelope.
#[tracing::instrument(name = "echo_query", skip_all, fields(route = %route.label))]
pub async fn echo_query(
    State(state): State<Arc<AppState>>,
    Extension(route): Extension<EchoRoute>,
    RawQuery(raw): RawQuery,
) -> Result<Json<SuccessEnvelope>, (StatusCode, Json<ErrorEnvelope>)> {
    let query = QueryParams::parse(raw.as_deref());
    tracing::debug!(params = query.len(), "query parsed");

    let use_case = EchoQueryUseCase {
        processor: state.processor.as_ref(),
        route,
    };

    let outcome = use_case
        .execute(query)
        .await
        .map_err(|err| map_process_error(&route, err))?;

    Ok(Json(SuccessEnvelope {
        route: outcome.route.label,
        query: outcome.query,
    }))
}

fn map_process_error(route: &EchoRoute, err: ProcessError) -> (StatusCode, Json<ErrorEnvelope>) {
    match err {
        ProcessError::Internal(message) => {
            tracing::error!(error = %message, "query processing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::internal(route, message)),
            )
        }
        ProcessError::Rejected(details) => {
            tracing::warn!(errors = details.len(), "query rejected");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorEnvelope::from_details(route, details)),
            )
        }
    }
}

// Turn a panic caught at the route boundary into the route's 500 envelope.
pub fn panic_response(route: &EchoRoute, payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope::internal(route, message)),
    )
        .into_response()
}
