use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobboard", about = "Browse a job catalog and track bookmarks")]
pub struct Config {
    /// Path to the catalog document ({"jobs": [...], "companies": [...]})
    #[arg(long, env = "JOBBOARD_CATALOG", default_value = "data/catalog.json")]
    pub catalog: PathBuf,

    /// Bookmark storage file (defaults to the platform data directory)
    #[arg(long, env = "JOBBOARD_STORAGE")]
    pub storage: Option<PathBuf>,

    /// Jobs per listing page
    #[arg(long, env = "JOBBOARD_PAGE_SIZE", default_value = "10")]
    pub page_size: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// List jobs (default when no subcommand given)
    List {
        /// Case-insensitive match on title or company
        #[arg(long, default_value = "")]
        search: String,

        /// All, Remote, Hybrid or Onsite
        #[arg(long, default_value = "All")]
        job_type: String,

        /// Required skill; repeat for several (all must match)
        #[arg(long = "skill")]
        skills: Vec<String>,

        #[arg(long, default_value = "0")]
        salary_min: u64,

        #[arg(long, default_value_t = jobboard::listing::DEFAULT_SALARY_CEILING)]
        salary_max: u64,

        /// posted-desc or salary-desc
        #[arg(long, default_value = "posted-desc")]
        sort: String,

        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Toggle a bookmark on a job id
    Bookmark {
        job_id: String,
    },
    /// Show bookmarked jobs
    Tracker,
    /// Show the distinct skills in the catalog
    Skills,
}

impl Config {
    /// Resolve the command, defaulting to an unfiltered listing.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List {
            search: String::new(),
            job_type: "All".to_string(),
            skills: Vec::new(),
            salary_min: 0,
            salary_max: jobboard::listing::DEFAULT_SALARY_CEILING,
            sort: "posted-desc".to_string(),
            page: 1,
        })
    }
}
