use clap::{Args, Parser, Subcommand};
use schooldesk_domain::EntityKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schooldesk")]
#[command(about = "Browse school administration records page by page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List one page of records
    List(ListArgs),
    /// Show the pager's page-number window
    Window(WindowArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Path to a JSON record export (or set SCHOOLDESK_FILE env var)
    #[arg(long, value_name = "FILE", env = "SCHOOLDESK_FILE")]
    pub file: PathBuf,
    /// Record kind: roles, students, teachers, parents, distinctions,
    /// country-codes, schools, classes, divisions
    #[arg(long)]
    pub kind: EntityKind,
    /// Search term applied before paging
    #[arg(long, default_value = "")]
    pub search: String,
    /// Page to show; out-of-range values are clamped
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,
    /// Items per page (defaults to the configured page size)
    #[arg(long)]
    pub per_page: Option<usize>,
}

#[derive(Args)]
pub struct WindowArgs {
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub current: u64,
    #[arg(long)]
    pub total: usize,
}
