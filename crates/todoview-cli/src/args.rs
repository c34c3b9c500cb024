use crate::types::{LogLevel, OutputFormat, SortArg, StatusArg};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todoview")]
#[command(about = "Replay todo action scripts and browse derived list views", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (defaults to TODOVIEW_PATH or the user data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Todo {
        #[command(subcommand)]
        command: TodoCommand,
    },

    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
}

#[derive(Subcommand)]
pub enum TodoCommand {
    /// Replay an action script and print the resulting page
    Run {
        script: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Replay an action script without printing a page
    Check { script: PathBuf },
}

/// View parameter overrides applied after the script
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub status: Option<StatusArg>,

    #[arg(long)]
    pub sort: Option<SortArg>,

    /// Page to display; pages past the end show no items
    #[arg(long)]
    pub page: Option<usize>,

    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users sorted by age
    List {
        #[arg(long)]
        select: Option<u32>,

        #[arg(long, default_value = "20")]
        limit: usize,

        #[command(flatten)]
        source: UserSourceArgs,
    },

    /// Show which rows re-render when the selection moves
    Select {
        #[arg(long)]
        from: Option<u32>,

        #[arg(long)]
        to: u32,

        #[command(flatten)]
        source: UserSourceArgs,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct UserSourceArgs {
    /// Number of generated users (overrides config)
    #[arg(long)]
    pub count: Option<u32>,

    /// Seed for generated ages (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}
