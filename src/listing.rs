use std::collections::BTreeSet;

use crate::bookmarks::BookmarkStore;
use crate::error::QueryError;
use crate::models::{EnrichedJob, FilterParams, JobTypeFilter, SortKey};
use crate::query::{DEFAULT_PAGE_SIZE, QueryPage, query};
use crate::storage::KeyValueStorage;

/// Upper end of the salary slider the listing starts with.
pub const DEFAULT_SALARY_CEILING: u64 = 200_000;

/// Caller-side listing state. Every filter or sort change sends the user
/// back to page 1.
#[derive(Debug, Clone)]
pub struct ListingController {
    jobs: Vec<EnrichedJob>,
    params: FilterParams,
    sort: SortKey,
    page: usize,
    page_size: usize,
}

impl ListingController {
    pub fn new(jobs: Vec<EnrichedJob>) -> Self {
        Self::with_page_size(jobs, DEFAULT_PAGE_SIZE)
    }

    /// A zero page size is bumped to 1.
    pub fn with_page_size(jobs: Vec<EnrichedJob>, page_size: usize) -> Self {
        Self {
            jobs,
            params: Self::default_params(),
            sort: SortKey::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    fn default_params() -> FilterParams {
        FilterParams::default().with_salary_range(0, DEFAULT_SALARY_CEILING)
    }

    pub fn jobs(&self) -> &[EnrichedJob] {
        &self.jobs
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.params.search_text = text.into();
        self.page = 1;
    }

    pub fn set_job_type(&mut self, job_type: JobTypeFilter) {
        self.params.job_type = job_type;
        self.page = 1;
    }

    pub fn set_required_skills<I, S>(&mut self, skills: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params.required_skills = skills.into_iter().map(Into::into).collect::<BTreeSet<_>>();
        self.page = 1;
    }

    pub fn set_salary_range(&mut self, min: u64, max: u64) -> Result<(), QueryError> {
        if min > max {
            return Err(QueryError::InvalidSalaryRange { min, max });
        }
        self.params.salary_min = min;
        self.params.salary_max = max;
        self.page = 1;
        Ok(())
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.params = Self::default_params();
        self.sort = SortKey::default();
        self.page = 1;
    }

    /// Jump to `page`, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.last_page());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn current_page(&self) -> QueryPage<'_> {
        self.run(self.page)
    }

    fn last_page(&self) -> usize {
        self.run(1).total_pages.max(1)
    }

    fn run(&self, page: usize) -> QueryPage<'_> {
        // Every setter keeps the state valid, so the engine never rejects it.
        match query(&self.jobs, &self.params, self.sort, page, self.page_size) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Listing state rejected by query engine: {e}");
                QueryPage {
                    items: Vec::new(),
                    total_filtered_count: 0,
                    total_pages: 0,
                    page,
                    page_size: self.page_size,
                }
            }
        }
    }
}

/// Bookmarked jobs in catalog order.
pub fn tracked_jobs<'a, S: KeyValueStorage>(
    jobs: &'a [EnrichedJob],
    store: &BookmarkStore<S>,
) -> Vec<&'a EnrichedJob> {
    jobs.iter().filter(|job| store.is_bookmarked(&job.id)).collect()
}
