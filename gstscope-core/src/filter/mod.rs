//! Filter predicate engine.
//!
//! A [`FilterSpec`] is built fresh for every request and compiled once into a
//! [`CompiledFilter`]. Listing and timeline queries share the compiled
//! predicate, so both views always agree on which records match.

mod compiled;
mod error;
mod spec;
mod time_range;


pub use compiled::CompiledFilter;
pub use error::FilterError;
pub use spec::FilterSpec;
pub use time_range::TimeRange;
