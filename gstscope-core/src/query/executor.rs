use crate::filter::CompiledFilter;
use crate::query::{Page, PageRequest};
use crate::record::{Level, Record};
use crate::session::Dataset;
use std::collections::BTreeSet;

/// Matching records in their original order.
pub fn matching<'a>(
    dataset: &'a Dataset,
    filter: &'a CompiledFilter,
) -> impl Iterator<Item = &'a Record> + 'a {
    dataset.records().iter().filter(move |r| filter.matches(r))
}

pub fn count(dataset: &Dataset, filter: &CompiledFilter) -> usize {
    if filter.is_unconstrained() {
        return dataset.len();
    }
    matching(dataset, filter).count()
}

/// Filter the full record sequence and cut out one page.
///
/// Every call re-scans the dataset. The dataset never changes once ready,
/// so there is nothing to invalidate.
pub fn list(dataset: &Dataset, filter: &CompiledFilter, request: PageRequest) -> Page {
    let total = count(dataset, filter);
    let entries = if filter.is_unconstrained() {
        let (start, end) = request.bounds(total);
        dataset.records()[start..end].to_vec()
    } else {
        let skip = (request.page() - 1).saturating_mul(request.per_page());
        matching(dataset, filter)
            .skip(skip)
            .take(request.per_page())
            .cloned()
            .collect()
    };

    Page {
        entries,
        total,
        page: request.page(),
        per_page: request.per_page(),
        total_pages: request.total_pages(total),
    }
}

/// Observed values of every enumerable field over the whole dataset.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DistinctValues {
    pub levels: BTreeSet<Level>,
    pub categories: BTreeSet<String>,
    pub pids: BTreeSet<u32>,
    pub threads: BTreeSet<String>,
    pub objects: BTreeSet<String>,
}

/// Single pass collecting distinct values. Unaffected by any filter.
pub fn distinct_values(dataset: &Dataset) -> DistinctValues {
    let mut out = DistinctValues::default();

    for record in dataset.records() {
        if let Some(level) = record.level {
            out.levels.insert(level);
        }
        if let Some(category) = &record.category
            && !out.categories.contains(category)
        {
            out.categories.insert(category.clone());
        }
        if let Some(pid) = record.pid {
            out.pids.insert(pid);
        }
        if let Some(thread) = &record.thread
            && !out.threads.contains(thread)
        {
            out.threads.insert(thread.clone());
        }
        if let Some(object) = &record.object
            && !out.objects.contains(object)
        {
            out.objects.insert(object.clone());
        }
    }

    out
}
