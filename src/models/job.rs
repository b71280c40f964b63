use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum JobType {
    Remote,
    Hybrid,
    Onsite,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::Remote, JobType::Hybrid, JobType::Onsite];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Remote => "Remote",
            JobType::Hybrid => "Hybrid",
            JobType::Onsite => "Onsite",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QueryError::UnknownJobType(s.to_string()))
    }
}

/// A raw posting as it appears in the reference document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: u64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "deserialize_posted_date")]
    pub posted_date: DateTime<Utc>,
}

/// A posting joined with its company's display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedJob {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: u64,
    pub skills: Vec<String>,
    pub posted_date: DateTime<Utc>,
    pub company_name: String,
    pub company_logo: Option<String>,
}

impl EnrichedJob {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

/// Accepts RFC 3339, a naive date-time (taken as UTC), or a bare date
/// (midnight UTC).
pub fn parse_posted_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_posted_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_posted_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid postedDate: {raw}")))
}
