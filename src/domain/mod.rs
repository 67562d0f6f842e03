// Domain layer: query parameters, route identities and the ports the endpoints depend on.

pub mod errors;
pub mod ports;
pub mod query;
pub mod route;

pub use errors::{ErrorDetail, ProcessError};
pub use ports::{QueryProcessor, SearchIndex};
pub use query::{QueryParams, QueryValue};
pub use route::{EchoRoute, ErrorLayout};
