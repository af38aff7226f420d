mod cli;
mod converter;
mod db;
mod encoding;
mod error;
mod fmt;
mod loader;
mod models;
mod preview;
mod settings;
mod stats;
mod store;
mod validator;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "shiwake=warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init {
            data_dir,
            cash_account,
        } => cli::init::run(data_dir, cash_account),
        Commands::Preview {
            file,
            org,
            cash_account,
            json,
        } => cli::preview::run(&file, org, cash_account.as_deref(), json),
        Commands::List {
            org,
            transaction_type,
            year,
        } => cli::list::run(org, transaction_type.as_deref(), year),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
