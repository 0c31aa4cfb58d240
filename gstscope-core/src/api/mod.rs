//! The HTTP contract, independent of the server that carries it.
//!
//! [`ApiHandler`] turns an [`ApiRequest`] into an [`ApiResponse`]; the
//! pingora gateway only moves bytes in and out. The DTOs in [`types`] are
//! shared with the client.

mod endpoint;
mod handler;
mod message;
mod params;
pub mod types;

#[cfg(test)]
mod tests;

pub use endpoint::ApiEndpoint;
pub use handler::{ApiHandler, ApiLimits};
pub use message::{ApiRequest, ApiResponse};
pub use params::QueryParams;
