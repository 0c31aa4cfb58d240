use crate::record::Record;
use crate::session::SessionId;
use std::sync::Arc;

/// An immutable, fully ingested record set.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
    skipped_lines: usize,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn with_skipped(records: Vec<Record>, skipped_lines: usize) -> Self {
        Self {
            records,
            skipped_lines,
        }
    }

    /// Records in parse order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

/// Lifecycle of a session. `Ready` and `Failed` are terminal.
#[derive(Debug, Clone)]
pub enum SessionState {
    Pending,
    Ready(Arc<Dataset>),
    Failed(String),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Pending)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Pending => "pending",
            SessionState::Ready(_) => "ready",
            SessionState::Failed(_) => "failed",
        }
    }
}

/// The single result an ingestion run hands to the store.
#[derive(Debug)]
pub enum IngestOutcome {
    Ready(Dataset),
    Failed(String),
}

impl From<IngestOutcome> for SessionState {
    fn from(outcome: IngestOutcome) -> Self {
        match outcome {
            IngestOutcome::Ready(dataset) => SessionState::Ready(Arc::new(dataset)),
            IngestOutcome::Failed(reason) => SessionState::Failed(reason),
        }
    }
}

/// A point-in-time view of a session, cheap to clone.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub state: SessionState,
}
