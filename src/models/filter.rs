use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;
use crate::models::job::{EnrichedJob, JobType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobTypeFilter {
    #[default]
    All,
    Only(JobType),
}

impl JobTypeFilter {
    pub fn matches(&self, job_type: JobType) -> bool {
        match self {
            JobTypeFilter::All => true,
            JobTypeFilter::Only(wanted) => *wanted == job_type,
        }
    }
}

impl From<JobType> for JobTypeFilter {
    fn from(job_type: JobType) -> Self {
        JobTypeFilter::Only(job_type)
    }
}

impl fmt::Display for JobTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobTypeFilter::All => f.write_str("All"),
            JobTypeFilter::Only(job_type) => job_type.fmt(f),
        }
    }
}

impl FromStr for JobTypeFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(JobTypeFilter::All);
        }
        s.parse::<JobType>().map(JobTypeFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    PostedDateDesc,
    SalaryDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PostedDateDesc => "posted-desc",
            SortKey::SalaryDesc => "salary-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "posted-desc" => Ok(SortKey::PostedDateDesc),
            "salary-desc" => Ok(SortKey::SalaryDesc),
            other => Err(QueryError::UnknownSortKey(other.to_string())),
        }
    }
}

/// The user-controlled query knobs. `Default` matches every job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub search_text: String,
    pub job_type: JobTypeFilter,
    pub required_skills: BTreeSet<String>,
    pub salary_min: u64,
    pub salary_max: u64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            job_type: JobTypeFilter::All,
            required_skills: BTreeSet::new(),
            salary_min: 0,
            salary_max: u64::MAX,
        }
    }
}

impl FilterParams {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_job_type(mut self, job_type: impl Into<JobTypeFilter>) -> Self {
        self.job_type = job_type.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_salary_range(mut self, min: u64, max: u64) -> Self {
        self.salary_min = min;
        self.salary_max = max;
        self
    }

    pub fn validate(&self) -> Result<(), QueryError> {
        if self.salary_min > self.salary_max {
            return Err(QueryError::InvalidSalaryRange {
                min: self.salary_min,
                max: self.salary_max,
            });
        }
        Ok(())
    }

    /// All active predicates, AND-combined.
    pub fn matches(&self, job: &EnrichedJob) -> bool {
        self.matches_search(job)
            && self.job_type.matches(job.job_type)
            && self.required_skills.iter().all(|skill| job.has_skill(skill))
            && (self.salary_min..=self.salary_max).contains(&job.salary)
    }

    fn matches_search(&self, job: &EnrichedJob) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let term = self.search_text.to_lowercase();
        job.title.to_lowercase().contains(&term) || job.company_name.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn job(title: &str, company: &str, skills: &[&str], salary: u64) -> EnrichedJob {
        EnrichedJob {
            id: "1".into(),
            company_id: "c1".into(),
            title: title.into(),
            location: "Remote".into(),
            job_type: JobType::Hybrid,
            salary,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            posted_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            company_name: company.into(),
            company_logo: None,
        }
    }

    #[test]
    fn test_default_matches_everything() {
        let params = FilterParams::default();
        assert!(params.matches(&job("Anything", "Anyone", &[], 0)));
        assert!(params.matches(&job("Anything", "Anyone", &["Go"], u64::MAX)));
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_or_company() {
        let params = FilterParams::default().with_search("ACME");
        assert!(params.matches(&job("Backend Dev", "Acme Corp", &[], 1)));
        assert!(params.matches(&job("acme tooling", "Globex", &[], 1)));
        assert!(!params.matches(&job("Backend Dev", "Globex", &[], 1)));
    }

    #[test]
    fn test_skills_are_conjunctive() {
        let candidate = job("Dev", "Acme", &["A", "B"], 1);
        assert!(FilterParams::default().with_skills(["A", "B"]).matches(&candidate));
        assert!(FilterParams::default().with_skills(["A"]).matches(&candidate));
        assert!(!FilterParams::default().with_skills(["A", "C"]).matches(&candidate));
    }

    #[test]
    fn test_salary_bounds_are_inclusive() {
        let params = FilterParams::default().with_salary_range(50_000, 100_000);
        assert!(params.matches(&job("Dev", "Acme", &[], 50_000)));
        assert!(params.matches(&job("Dev", "Acme", &[], 100_000)));
        assert!(!params.matches(&job("Dev", "Acme", &[], 49_999)));
        assert!(!params.matches(&job("Dev", "Acme", &[], 100_001)));
    }

    #[test]
    fn test_job_type_filter() {
        let candidate = job("Dev", "Acme", &[], 1);
        assert!(FilterParams::default().with_job_type(JobType::Hybrid).matches(&candidate));
        assert!(!FilterParams::default().with_job_type(JobType::Remote).matches(&candidate));
    }

    #[test]
    fn test_inverted_salary_range_is_invalid() {
        let params = FilterParams::default().with_salary_range(10, 5);
        assert_eq!(
            params.validate(),
            Err(QueryError::InvalidSalaryRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn test_sort_key_names() {
        assert_eq!("salary-desc".parse::<SortKey>().unwrap(), SortKey::SalaryDesc);
        assert_eq!(SortKey::default().to_string(), "posted-desc");
        assert!(matches!(
            "title-asc".parse::<SortKey>(),
            Err(QueryError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn test_job_type_filter_parses_all() {
        assert_eq!("All".parse::<JobTypeFilter>().unwrap(), JobTypeFilter::All);
        assert_eq!(
            "remote".parse::<JobTypeFilter>().unwrap(),
            JobTypeFilter::Only(JobType::Remote)
        );
    }
}
