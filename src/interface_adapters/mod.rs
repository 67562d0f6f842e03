// Interface adapters: HTTP protocol, handlers, routing and outbound clients.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
