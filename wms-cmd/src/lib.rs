//! Command implementations for the WMS shelves CLI.
//!
//! Drives the same refresh logic the browser uses, against a running
//! server, and prints what the shelf dropdown would contain.

use clap::{Subcommand, ValueEnum};

pub mod shelves;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `value<TAB>label` per option
    Table,
    /// JSON array of `{value, label, disabled}`
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the shelf options for a warehouse
    Shelves {
        /// Server root, e.g. http://localhost:5000
        #[arg(short = 'b', long, default_value = "http://localhost:5000")]
        base_url: String,

        /// Warehouse id (empty prints the sentinel only)
        #[arg(short = 'w', long)]
        warehouse: String,

        /// Cookie header of a logged-in staff session
        #[arg(long, env = "WMS_SESSION_COOKIE")]
        session_cookie: Option<String>,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Show a disabled "shelves unavailable" entry when the fetch fails
        #[arg(long)]
        placeholder: bool,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Shelves {
            base_url,
            warehouse,
            session_cookie,
            format,
            placeholder,
            timeout_secs,
        } => {
            let request = shelves::ShelvesRequest {
                base_url,
                warehouse,
                session_cookie,
                placeholder,
                timeout: std::time::Duration::from_secs(timeout_secs),
            };
            shelves::run_shelves(&request, format).await
        }
    }
}
