pub mod company;
pub mod filter;
pub mod job;

pub use company::Company;
pub use filter::{FilterParams, JobTypeFilter, SortKey};
pub use job::{EnrichedJob, JobPosting, JobType};
