use crate::domain::EchoRoute;
use crate::interface_adapters::handlers::echo::{echo_query, panic_response};
use crate::interface_adapters::state::AppState;
use axum::{Extension, Router, routing::get};
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

// Build the HTTP router with one echo endpoint per route.
pub fn app(state: Arc<AppState>) -> Router {
    EchoRoute::all()
        .into_iter()
        .fold(Router::new(), |router, route| router.merge(echo_router(route)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn echo_router(route: EchoRoute) -> Router<Arc<AppState>> {
    Router::new()
        .route(route.path, get(echo_query))
        .layer(Extension(route))
        .layer(CatchPanicLayer::custom(
            move |payload: Box<dyn Any + Send + 'static>| panic_response(&route, payload),
        ))
}
