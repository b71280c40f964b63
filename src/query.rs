use crate::error::QueryError;
use crate::models::{EnrichedJob, FilterParams, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPage<'a> {
    pub items: Vec<&'a EnrichedJob>,
    pub total_filtered_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl QueryPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter, sort and paginate `jobs`. `page` is 1-based; a page past the end
/// yields no items rather than an error.
pub fn query<'a>(
    jobs: &'a [EnrichedJob],
    params: &FilterParams,
    sort: SortKey,
    page: usize,
    page_size: usize,
) -> Result<QueryPage<'a>, QueryError> {
    params.validate()?;
    if page == 0 {
        return Err(QueryError::InvalidPage);
    }
    if page_size == 0 {
        return Err(QueryError::InvalidPageSize);
    }

    let mut matched = filter_jobs(jobs, params);
    sort_jobs(&mut matched, sort);

    let total_filtered_count = matched.len();
    let total_pages = total_filtered_count.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let items: Vec<&EnrichedJob> = matched.into_iter().skip(start).take(page_size).collect();

    tracing::debug!(
        "Query matched {total_filtered_count} jobs, page {page}/{total_pages} ({} items)",
        items.len()
    );

    Ok(QueryPage {
        items,
        total_filtered_count,
        total_pages,
        page,
        page_size,
    })
}

pub fn filter_jobs<'a>(jobs: &'a [EnrichedJob], params: &FilterParams) -> Vec<&'a EnrichedJob> {
    jobs.iter().filter(|job| params.matches(job)).collect()
}

/// Stable: ties keep their incoming order.
pub fn sort_jobs(jobs: &mut [&EnrichedJob], sort: SortKey) {
    match sort {
        SortKey::SalaryDesc => jobs.sort_by(|a, b| b.salary.cmp(&a.salary)),
        SortKey::PostedDateDesc => jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
    }
}
