mod config;
pub mod server;
pub mod tracing;

pub use server::{TestServer, fixture_log};
pub use tracing::{CapturedEvent, init_test_tracing};
