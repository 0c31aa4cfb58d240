//! Filter options: the values a client may pick from for each field.


use crate::query::{DistinctValues, distinct_values};
use crate::record::Level;
use crate::session::Dataset;
use serde::{Deserialize, Serialize};

/// Sorted, duplicate-free value lists. Levels are in severity order, the
/// rest in natural order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub levels: Vec<Level>,
    pub categories: Vec<String>,
    pub pids: Vec<u32>,
    pub threads: Vec<String>,
    pub objects: Vec<String>,
}

impl From<DistinctValues> for FilterOptions {
    fn from(values: DistinctValues) -> Self {
        Self {
            levels: values.levels.into_iter().collect(),
            categories: values.categories.into_iter().collect(),
            pids: values.pids.into_iter().collect(),
            threads: values.threads.into_iter().collect(),
            objects: values.objects.into_iter().collect(),
        }
    }
}

/// Derived over the whole dataset, independent of any active filter.
pub fn derive(dataset: &Dataset) -> FilterOptions {
    distinct_values(dataset).into()
}
