use crate::client::{PollError, PollPolicy, PollStatus, poll_until_ready};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn fast(max_attempts: u32) -> PollPolicy {
    PollPolicy {
        max_attempts,
        delay: Duration::from_millis(1),
    }
}

#[test]
fn default_policy_is_ten_attempts_one_second_apart() {
    let policy = PollPolicy::default();

    assert_eq!(policy.max_attempts, 10);
    assert_eq!(policy.delay, Duration::from_secs(1));
}

#[test]
fn ready_on_third_probe() {
    // Arrange
    let mut probes = 0;

    // Act
    let result = poll_until_ready(fast(10), |attempt| {
        probes += 1;
        if attempt == 3 {
            PollStatus::Ready("options")
        } else {
            PollStatus::NotReady
        }
    });

    // Assert
    assert_eq!(result, Ok("options"));
    assert_eq!(probes, 3);
}

#[test]
fn exhausted_after_max_attempts() {
    let mut probes = 0;

    let result: Result<(), _> = poll_until_ready(fast(4), |_| {
        probes += 1;
        PollStatus::NotReady
    });

    assert_eq!(result, Err(PollError::Exhausted { attempts: 4 }));
    assert_eq!(probes, 4);
}

#[test]
fn failure_stops_immediately() {
    let mut probes = 0;

    let result: Result<(), _> = poll_until_ready(fast(10), |_| {
        probes += 1;
        PollStatus::Failed("no log entries".to_string())
    });

    assert_eq!(
        result,
        Err(PollError::IngestionFailed("no log entries".to_string()))
    );
    assert_eq!(probes, 1);
}

#[test]
fn does_not_sleep_after_last_attempt() {
    let policy = PollPolicy {
        max_attempts: 1,
        delay: Duration::from_secs(5),
    };
    let started = Instant::now();

    let result: Result<(), _> = poll_until_ready(policy, |_| PollStatus::NotReady);

    assert!(result.is_err());
    assert!(started.elapsed() < Duration::from_secs(1));
}
