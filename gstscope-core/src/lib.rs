pub mod api;
pub mod cli;
pub mod client;
pub mod conf;
pub mod engine;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod logging;
pub mod options;
pub mod parser;
pub mod query;
pub mod record;
pub mod server;
pub mod session;
pub mod timeline;

#[cfg(test)]
mod test_support;

pub use engine::LogEngine;
pub use error::{EngineError, EngineResult};
