mod executor;
mod page;

#[cfg(test)]
mod tests;

pub use executor::{DistinctValues, count, distinct_values, list, matching};
pub use page::{Page, PageRequest};
