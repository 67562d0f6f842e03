// Use cases layer: the echo workflow shared by every endpoint.

pub mod echo;
#[cfg(test)]
pub(crate) mod test_support;

pub use echo::{EchoOutcome, EchoQueryUseCase, Passthrough};
