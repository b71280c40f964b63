mod config;

use anyhow::Context;
use clap::Parser;
use jobboard::{
    BookmarkStore, Catalog, EnrichedJob, FileStorage, JobTypeFilter, ListingController, SortKey,
    tracked_jobs,
};
use tracing_subscriber::EnvFilter;

use crate::config::{Command, Config};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobboard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let catalog = Catalog::from_path(&config.catalog)
        .with_context(|| format!("Failed to load catalog {}", config.catalog.display()))?;
    let storage = match &config.storage {
        Some(path) => FileStorage::new(path),
        None => FileStorage::open_default(),
    };
    tracing::info!("Using bookmark storage {}", storage.path().display());
    let store = BookmarkStore::initialize(storage);

    match config.resolved_command() {
        Command::List {
            search,
            job_type,
            skills,
            salary_min,
            salary_max,
            sort,
            page,
        } => {
            let mut listing = ListingController::with_page_size(catalog.enriched(), config.page_size);
            listing.set_search(search);
            listing.set_job_type(job_type.parse::<JobTypeFilter>()?);
            listing.set_required_skills(skills);
            listing.set_salary_range(salary_min, salary_max)?;
            listing.set_sort(sort.parse::<SortKey>()?);
            listing.go_to_page(page);

            let result = listing.current_page();
            println!(
                "Showing {} of {} jobs (page {} of {})",
                result.items.len(),
                result.total_filtered_count,
                result.page,
                result.total_pages.max(1)
            );
            if result.is_empty() {
                println!("No jobs found. Try adjusting your search or filters.");
            }
            for job in &result.items {
                print_job(job, store.is_bookmarked(&job.id));
            }
        }
        Command::Bookmark { job_id } => {
            if !catalog.jobs.iter().any(|job| job.id == job_id) {
                tracing::warn!("Job {job_id} is not in the catalog");
            }
            let bookmarked = store.toggle_bookmark(&job_id);
            println!(
                "{} {job_id}",
                if bookmarked { "Bookmarked" } else { "Removed bookmark" }
            );
        }
        Command::Tracker => {
            let jobs = catalog.enriched();
            let tracked = tracked_jobs(&jobs, &store);
            if tracked.is_empty() {
                println!("No bookmarks yet.");
            } else {
                let noun = if tracked.len() == 1 { "job" } else { "jobs" };
                println!("You have {} bookmarked {noun}", tracked.len());
                for job in tracked {
                    print_job(job, true);
                }
            }
        }
        Command::Skills => {
            for skill in catalog.skills() {
                println!("{skill}");
            }
        }
    }

    Ok(())
}

fn print_job(job: &EnrichedJob, bookmarked: bool) {
    println!(
        "{} [{}] {} at {} ({}, {}) ${}k posted {}  {}",
        if bookmarked { "*" } else { " " },
        job.id,
        job.title,
        job.company_name,
        job.location,
        job.job_type,
        job.salary / 1000,
        job.posted_date.format("%Y-%m-%d"),
        job.skills.join(", ")
    );
}
