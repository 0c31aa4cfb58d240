//! Client side of the API: a blocking HTTP client and the readiness polling
//! it uses after an upload.

mod api_client;
mod poll;

#[cfg(test)]
mod tests;

pub use api_client::{ClientError, GstscopeClient, LogQuery, TimelineQuery};
pub use poll::{PollError, PollPolicy, PollStatus, poll_until_ready};
