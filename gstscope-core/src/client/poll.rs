use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Bounded retry schedule for waiting on a pending session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(1),
        }
    }
}

/// What a single probe observed.
#[derive(Debug)]
pub enum PollStatus<T> {
    Ready(T),
    /// Still pending, or a transient error. Retried.
    NotReady,
    /// Ingestion failed. Never retried.
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("session not ready after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("ingestion failed: {0}")]
    IngestionFailed(String),
}

/// Probe until ready, failed, or `policy.max_attempts` probes were made.
///
/// Sleeps `policy.delay` between probes, never after the last one.
pub fn poll_until_ready<T, F>(policy: PollPolicy, mut probe: F) -> Result<T, PollError>
where
    F: FnMut(u32) -> PollStatus<T>,
{
    for attempt in 1..=policy.max_attempts {
        match probe(attempt) {
            PollStatus::Ready(value) => return Ok(value),
            PollStatus::Failed(reason) => return Err(PollError::IngestionFailed(reason)),
            PollStatus::NotReady => {
                tracing::debug!(attempt, max_attempts = policy.max_attempts, "session not ready");
                if attempt < policy.max_attempts {
                    thread::sleep(policy.delay);
                }
            }
        }
    }

    Err(PollError::Exhausted {
        attempts: policy.max_attempts,
    })
}
