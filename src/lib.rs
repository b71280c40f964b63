//! Job catalog core: enrichment, the filter/sort/paginate query engine and
//! the persisted bookmark store.

pub mod bookmarks;
pub mod catalog;
pub mod enrich;
pub mod error;
pub mod listing;
pub mod models;
pub mod query;
pub mod storage;

pub use bookmarks::{BOOKMARKS_KEY, BookmarkSet, BookmarkStore};
pub use catalog::Catalog;
pub use enrich::enrich;
pub use error::{CatalogError, QueryError, StorageError};
pub use listing::{ListingController, tracked_jobs};
pub use models::{Company, EnrichedJob, FilterParams, JobPosting, JobType, JobTypeFilter, SortKey};
pub use query::{DEFAULT_PAGE_SIZE, QueryPage, query};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
