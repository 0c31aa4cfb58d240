use crate::error::{EngineError, EngineResult};
use crate::parser::LogParser;
use crate::session::{Dataset, IngestOutcome, SessionId, SessionStore};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

const SAMPLE_RECORDS: usize = 3;

/// Creates a session per upload and parses it off the request path.
#[derive(Clone)]
pub struct IngestionPipeline {
    store: Arc<dyn SessionStore>,
    parser: Arc<dyn LogParser>,
}

impl IngestionPipeline {
    pub fn new(store: Arc<dyn SessionStore>, parser: Arc<dyn LogParser>) -> Self {
        Self { store, parser }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Register a `Pending` session and start parsing in the background.
    ///
    /// The id is valid as soon as this returns. Fails without creating a
    /// session when called outside a tokio runtime.
    pub fn submit(&self, body: Bytes) -> EngineResult<(SessionId, JoinHandle<()>)> {
        let runtime = Handle::try_current()
            .map_err(|e| EngineError::InternalFault(format!("no runtime for ingestion: {e}")))?;

        let id = self.store.create();
        tracing::info!(session_id = %id, bytes = body.len(), "upload accepted");

        let pipeline = self.clone();
        let task_id = id.clone();
        let handle = runtime.spawn_blocking(move || {
            if let Err(e) = pipeline.ingest(&task_id, &body) {
                tracing::error!(session_id = %task_id, error = %e, "ingestion result not stored");
            }
        });

        Ok((id, handle))
    }

    /// Parse `body` and move the session to its terminal state.
    ///
    /// A session that is unknown or already terminal is an `InternalFault`;
    /// its stored state is left as it was.
    pub fn ingest(&self, id: &SessionId, body: &[u8]) -> EngineResult<()> {
        let started = Instant::now();

        let outcome = match self.parser.parse(body) {
            Ok(parsed) => {
                let elapsed = started.elapsed();
                tracing::info!(
                    session_id = %id,
                    records = parsed.records.len(),
                    skipped_lines = parsed.skipped_lines,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "log parsed"
                );
                for record in parsed.records.iter().take(SAMPLE_RECORDS) {
                    tracing::debug!(session_id = %id, ?record, "sample record");
                }
                IngestOutcome::Ready(Dataset::with_skipped(parsed.records, parsed.skipped_lines))
            }
            Err(e) => {
                tracing::warn!(session_id = %id, error = %e, "ingestion failed");
                IngestOutcome::Failed(e.to_string())
            }
        };

        self.store
            .transition(id, outcome)
            .map_err(|e| EngineError::InternalFault(e.to_string()))
    }
}
