mod id;
mod state;
mod store;


pub use id::SessionId;
pub use state::{Dataset, IngestOutcome, Session, SessionState};
pub use store::{MemorySessionStore, SessionStore, StoreError};
