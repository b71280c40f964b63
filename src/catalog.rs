use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;

use crate::enrich::enrich;
use crate::error::CatalogError;
use crate::models::{Company, EnrichedJob, JobPosting};

/// The static reference document: `{ "jobs": [...], "companies": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub companies: Vec<Company>,
}

impl Catalog {
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        tracing::info!(
            "Loaded catalog: {} jobs, {} companies",
            catalog.jobs.len(),
            catalog.companies.len()
        );
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn enriched(&self) -> Vec<EnrichedJob> {
        enrich(&self.jobs, &self.companies)
    }

    /// Distinct skills across all postings, sorted.
    pub fn skills(&self) -> Vec<String> {
        self.jobs
            .iter()
            .flat_map(|job| job.skills.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
