//! Timeline aggregation.
//!
//! Matching records are grouped into fixed-width, epoch-aligned buckets.
//! Bucket keys are kept in nanoseconds; rendering them in a client unit is
//! left to the API layer.

mod aggregate;
mod interval;


pub use aggregate::{Bucket, Timeline, aggregate};
pub use interval::Interval;
