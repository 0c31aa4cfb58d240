use std::fmt;
use thiserror::Error;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Nanoseconds since the session-local epoch (the pipeline running clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Timestamp(u64);

/// The unit a client-supplied time value is expressed in.
///
/// Clients only ever see microseconds or milliseconds; nanoseconds stay
/// internal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Microseconds,
    Milliseconds,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid clock value '{0}'")]
pub struct InvalidClock(pub String);

impl TimeUnit {
    pub fn nanos_per_unit(&self) -> u64 {
        match self {
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
        }
    }

    pub fn from_microseconds_flag(use_microseconds: bool) -> Self {
        if use_microseconds {
            TimeUnit::Microseconds
        } else {
            TimeUnit::Milliseconds
        }
    }
}

impl Timestamp {
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub const fn from_micros(micros: u64) -> Self {
        Self(micros * 1_000)
    }

    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Floor the timestamp into `unit`.
    ///
    /// This is the only downscaling of a native timestamp. The result is a
    /// transient comparison value and is never written back to a record.
    pub fn to_unit(&self, unit: TimeUnit) -> u64 {
        self.0 / unit.nanos_per_unit()
    }

    /// Parse the GStreamer clock format `H:MM:SS.fffffffff`.
    ///
    /// Hours are unbounded; the fraction may carry 1 to 9 digits.
    pub fn parse_clock(s: &str) -> Result<Self, InvalidClock> {
        let invalid = || InvalidClock(s.to_string());

        let mut parts = s.splitn(3, ':');
        let (Some(h), Some(m), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let (sec, frac) = rest.split_once('.').unwrap_or((rest, ""));

        let digits = |v: &str| !v.is_empty() && v.bytes().all(|b| b.is_ascii_digit());
        if !digits(h) || !digits(m) || !digits(sec) || frac.len() > 9 {
            return Err(invalid());
        }
        if !frac.is_empty() && !digits(frac) {
            return Err(invalid());
        }

        let h: u64 = h.parse().map_err(|_| invalid())?;
        let m: u64 = m.parse().map_err(|_| invalid())?;
        let sec: u64 = sec.parse().map_err(|_| invalid())?;
        if m >= 60 || sec >= 60 {
            return Err(invalid());
        }

        let frac_nanos = if frac.is_empty() {
            0
        } else {
            let value: u64 = frac.parse().map_err(|_| invalid())?;
            value * 10u64.pow(9 - frac.len() as u32)
        };

        let secs = h
            .checked_mul(3600)
            .and_then(|v| v.checked_add(m * 60 + sec))
            .ok_or_else(invalid)?;
        let nanos = secs
            .checked_mul(NANOS_PER_SEC)
            .and_then(|v| v.checked_add(frac_nanos))
            .ok_or_else(invalid)?;

        Ok(Self(nanos))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0 / NANOS_PER_SEC;
        let nanos = self.0 % NANOS_PER_SEC;
        write!(
            f,
            "{}:{:02}:{:02}.{:09}",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60,
            nanos
        )
    }
}
