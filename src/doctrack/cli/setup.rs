use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{} (expected YYYY-MM-DD)", e))
}

/// Process arguments.
#[derive(Parser, Debug)]
#[command(name = "doctrack", bin_name = "doctrack", version = get_version())]
#[command(about = "Track document and contract expiry dates", long_about = None)]
pub struct Cli {
    /// Reference date for statuses (YYYY-MM-DD), defaults to the local date
    #[arg(long, value_parser = parse_date, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Start the session without the sample documents
    #[arg(long)]
    pub empty: bool,

    /// Directory containing config.json
    #[arg(long, value_name = "DIR")]
    pub config: Option<PathBuf>,

    /// Run a session command and exit (repeatable, runs in order)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "doctrack",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a document
    #[command(alias = "n")]
    Add {
        /// Name of the document (words are joined)
        #[arg(num_args = 0..)]
        name: Vec<String>,

        /// Responsible party
        #[arg(long)]
        by: Option<String>,

        /// Expiry date (YYYY-MM-DD), or "never"
        #[arg(long, value_name = "DATE")]
        expires: Option<String>,

        /// Document type (defaults to the configured category)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        doc_type: Option<String>,

        /// Short summary
        #[arg(short, long)]
        summary: Option<String>,

        /// Name of an attached file (not read)
        #[arg(long, value_name = "NAME")]
        file: Option<String>,
    },

    /// List documents, using the session filter unless overridden
    #[command(alias = "ls")]
    List {
        /// Only this type ("All" for every type)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        doc_type: Option<String>,

        /// Case-insensitive search in name, responsible party and summary
        #[arg(short, long)]
        search: Option<String>,

        /// Print the derived views as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the session filter used by `list`
    #[command(alias = "f")]
    Filter {
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        doc_type: Option<String>,

        #[arg(short, long)]
        search: Option<String>,

        /// Reset to all types and no search
        #[arg(long)]
        clear: bool,
    },

    /// Show one document in full
    #[command(alias = "v")]
    View { id: String },

    /// Edit a document
    #[command(alias = "e")]
    Edit { id: String },

    /// Delete a document
    #[command(alias = "rm")]
    Delete { id: String },

    /// Show counts per status
    Stats,

    /// Show the type filter choices
    Types {
        /// Show the categories offered when adding instead
        #[arg(long)]
        categories: bool,
    },

    /// Toggle table columns (type, expiry, status, by)
    Columns { names: Vec<String> },

    /// End the session
    #[command(alias = "exit", alias = "q")]
    Quit,
}
