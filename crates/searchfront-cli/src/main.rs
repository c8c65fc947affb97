// searchfront CLI entry point

use clap::Parser;
use searchfront_cli::{logging, router::Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let code = match searchfront_cli::router::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            1
        }
    };

    std::process::exit(code);
}
