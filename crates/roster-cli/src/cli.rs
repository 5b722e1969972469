//! CLI argument definitions for the roster browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_model::{SortOrder, WebsiteFilter};

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster - browse a remote user directory",
    long_about = "Browse a remote user directory with search, website filtering,\n\
                  alphabetical sorting, inline editing, and pagination.\n\
                  Records are fetched once and mirrored into a local cache file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Remote endpoint returning the user list as a JSON array
    /// (falls back to the ROSTER_ENDPOINT environment variable).
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Path of the local cache file.
    #[arg(
        long = "cache-file",
        value_name = "PATH",
        default_value = "roster-cache.json",
        global = true
    )]
    pub cache_file: PathBuf,

    /// Skip the local cache entirely (always fetch, never mirror).
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the record list (cache first) and mirror it locally.
    Fetch,

    /// Render one page of the roster.
    List(ListArgs),

    /// Edit a record's name and/or email, then save.
    Edit(EditArgs),

    /// Delete a record.
    Delete(DeleteArgs),

    /// Browse interactively: debounced search, inline editing, paging.
    Browse(BrowseArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Search text matched against record names.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Website-domain filter.
    #[arg(long, value_enum, default_value = "all")]
    pub filter: FilterArg,

    /// Alphabetical sort order on names.
    #[arg(long, value_enum, default_value = "none")]
    pub sort: SortArg,

    /// 1-based page to render.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long = "page-size", default_value_t = 5)]
    pub page_size: usize,
}

#[derive(Parser)]
pub struct EditArgs {
    /// Id of the record to edit.
    #[arg(value_name = "ID")]
    pub id: u64,

    /// New name (kept as-is when omitted).
    #[arg(long)]
    pub name: Option<String>,

    /// New email (kept as-is when omitted).
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Id of the record to delete.
    #[arg(value_name = "ID")]
    pub id: u64,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Rows per page.
    #[arg(long = "page-size", default_value_t = 5)]
    pub page_size: usize,

    /// Quiet interval before a search commit, in milliseconds.
    #[arg(long = "debounce-ms", default_value_t = 1500)]
    pub debounce_ms: u64,
}

/// CLI website filter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Org,
    Net,
    Info,
    Biz,
}

impl From<FilterArg> for WebsiteFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => WebsiteFilter::All,
            FilterArg::Org => WebsiteFilter::Org,
            FilterArg::Net => WebsiteFilter::Net,
            FilterArg::Info => WebsiteFilter::Info,
            FilterArg::Biz => WebsiteFilter::Biz,
        }
    }
}

/// CLI sort order choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    None,
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::None => SortOrder::None,
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
