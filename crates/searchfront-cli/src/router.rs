// Command routing and dispatch

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use searchfront_api::{ConfigManager, ResultFetcher};

use crate::commands;

/// searchfront - search backend proxy and query gadgets
#[derive(Parser, Debug)]
#[command(name = "searchfront")]
#[command(about = "Query the search backend and try query gadgets from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Detect timer intent and extract the requested duration
    Timer {
        /// Query text
        #[arg(required = true, value_name = "QUERY")]
        query: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch search results from the backend
    Search {
        /// Query text, sent as the `q` parameter
        #[arg(value_name = "QUERY")]
        query: Vec<String>,

        /// Extra query parameter, repeatable
        #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = commands::parse_param)]
        params: Vec<(String, String)>,

        /// Override the backend base URL
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
}

/// Run the parsed command and return the process exit code
pub async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Timer { query, json } => {
            let report = commands::TimerReport::new(&query.join(" "));
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
            }
            Ok(0)
        }
        Commands::Search {
            query,
            params,
            api_url,
        } => {
            let manager = match cli.config {
                Some(path) => ConfigManager::with_path(path),
                None => ConfigManager::new(),
            };
            let mut config = manager.load().context("Failed to load configuration")?;
            if let Some(api_url) = api_url {
                config = config.with_api_url(api_url);
            }

            let fetcher =
                ResultFetcher::from_config(config).context("Failed to create HTTP client")?;
            let params = commands::build_params(&query, params);

            match fetcher.fetch(&params).await {
                Ok(results) => {
                    tracing::info!("Fetched {} results", results.len());
                    println!("{}", serde_json::to_string_pretty(&results)?);
                    Ok(0)
                }
                Err(e) => {
                    eprintln!("{}", commands::describe_failure(&e));
                    Ok(1)
                }
            }
        }
    }
}
