pub mod init;
pub mod list;
pub mod preview;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shiwake", about = "Journal-CSV preview CLI for political-fund bookkeeping.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up shiwake: choose a data directory and initialize the database.
    Init {
        /// Path for shiwake data (default: ~/Documents/shiwake)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Account label of the organization's cash account (default: 普通預金)
        #[arg(long = "cash-account")]
        cash_account: Option<String>,
    },
    /// Preview a journal CSV export: classify rows and flag duplicates.
    Preview {
        /// Path to the exported CSV file (UTF-8 or Shift_JIS)
        file: String,
        /// Political organization the file belongs to
        #[arg(long)]
        org: i64,
        /// Override the configured cash account label for this run
        #[arg(long = "cash-account")]
        cash_account: Option<String>,
        /// Print the preview as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// List persisted transactions.
    List {
        /// Filter by political organization
        #[arg(long)]
        org: Option<i64>,
        /// Filter by type: income, expense, unclassified
        #[arg(long = "type")]
        transaction_type: Option<String>,
        /// Filter by financial year: YYYY
        #[arg(long)]
        year: Option<i32>,
    },
    /// Show current database and summary statistics.
    Status,
}
