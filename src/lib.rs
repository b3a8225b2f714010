pub mod config;
pub mod contract;
pub mod extract;
pub mod fetch;
pub mod load_config;
pub mod publish;
pub mod relink;
pub mod rewrite;
pub mod store;
pub mod walk;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fetch::HttpFetcher;
use load_config::load_config;
use relink::relink;
use store::HttpObjectStore;

/// CLI for pic-relink: re-host remote markdown images and rewrite the links.
#[derive(Parser)]
#[clap(
    name = "pic-relink",
    version,
    about = "Scan markdown documents for remote images, re-host them in an object store, and rewrite the links"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Relink all documents under the configured root using the given config file
    Run {
        /// Path to the YAML config file
        #[clap(long)]
        config: PathBuf,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    match cli.command {
        Commands::Run { config } => {
            let config = load_config(config)?;
            config.trace_loaded();

            let fetcher = HttpFetcher::new();
            let store = HttpObjectStore::new(&config.store);

            println!("Relink starting...");
            match relink(&config, &fetcher, &store).await {
                Ok(report) => {
                    println!("Relink complete.\nReport:");
                    println!("{report:#?}");
                    Ok(())
                }
                Err(e) => {
                    eprintln!("[ERROR] Relink failed: {e}");
                    Err(anyhow::Error::msg(e))
                }
            }
        }
    }
}
