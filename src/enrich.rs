use std::collections::HashMap;

use crate::models::{Company, EnrichedJob, JobPosting};

pub const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Join each posting with its company. Output order follows `jobs`.
pub fn enrich(jobs: &[JobPosting], companies: &[Company]) -> Vec<EnrichedJob> {
    // Later duplicates overwrite earlier ones.
    let by_id: HashMap<&str, &Company> = companies.iter().map(|c| (c.id.as_str(), c)).collect();

    jobs.iter()
        .map(|job| {
            let company = by_id.get(job.company_id.as_str());
            EnrichedJob {
                id: job.id.clone(),
                company_id: job.company_id.clone(),
                title: job.title.clone(),
                location: job.location.clone(),
                job_type: job.job_type,
                salary: job.salary,
                skills: job.skills.clone(),
                posted_date: job.posted_date,
                company_name: company
                    .map(|c| c.name.as_str())
                    .filter(|name| !name.is_empty())
                    .unwrap_or(UNKNOWN_COMPANY)
                    .to_string(),
                company_logo: company
                    .and_then(|c| c.logo.clone())
                    .filter(|logo| !logo.is_empty()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobType;
    use chrono::{TimeZone, Utc};

    fn posting(id: &str, company_id: &str) -> JobPosting {
        JobPosting {
            id: id.into(),
            company_id: company_id.into(),
            title: format!("Job {id}"),
            location: "Lisbon".into(),
            job_type: JobType::Remote,
            salary: 60_000,
            skills: vec!["Rust".into()],
            posted_date: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        }
    }

    fn company(id: &str, name: &str, logo: Option<&str>) -> Company {
        Company {
            id: id.into(),
            name: name.into(),
            logo: logo.map(Into::into),
        }
    }

    #[test]
    fn test_resolves_company_fields() {
        let jobs = vec![posting("1", "c1")];
        let companies = vec![company("c1", "Acme", Some("acme.png"))];
        let enriched = enrich(&jobs, &companies);
        assert_eq!(enriched[0].company_name, "Acme");
        assert_eq!(enriched[0].company_logo.as_deref(), Some("acme.png"));
    }

    #[test]
    fn test_missing_company_is_unknown() {
        let enriched = enrich(&[posting("1", "nope")], &[]);
        assert_eq!(enriched[0].company_name, UNKNOWN_COMPANY);
        assert!(enriched[0].company_logo.is_none());
    }

    #[test]
    fn test_blank_company_fields_count_as_missing() {
        let companies = vec![company("c1", "", Some(""))];
        let enriched = enrich(&[posting("1", "c1")], &companies);
        assert_eq!(enriched[0].company_name, UNKNOWN_COMPANY);
        assert!(enriched[0].company_logo.is_none());
    }

    #[test]
    fn test_duplicate_company_last_wins() {
        let companies = vec![company("c1", "Old Name", None), company("c1", "New Name", None)];
        let enriched = enrich(&[posting("1", "c1")], &companies);
        assert_eq!(enriched[0].company_name, "New Name");
    }

    #[test]
    fn test_preserves_order_and_is_pure() {
        let jobs = vec![posting("3", "c1"), posting("1", "c1"), posting("2", "c2")];
        let companies = vec![company("c1", "Acme", None)];
        let first = enrich(&jobs, &companies);
        let second = enrich(&jobs, &companies);
        let ids: Vec<&str> = first.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(first, second);
    }
}
