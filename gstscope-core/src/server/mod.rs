mod body;
mod gateway;
mod pid;
pub mod setup;


pub use body::{BodyBuffer, INITIAL_BODY_CAPACITY, TooLarge};
pub use gateway::ApiGateway;
pub use pid::PidFile;
pub use setup::{build_api_handler, build_pingora_server, run};
