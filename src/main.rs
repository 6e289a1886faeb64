use clap::Parser;

use shop_smoke::cli::{self, Cli};
use shop_smoke::runner::RunResult;

#[tokio::main]
async fn main() {
    // Load .env if present so overrides like API_URL and POSTGRES_HOST
    // work without exporting them by hand.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli::run(cli).await {
        RunResult::Passed => {}
        RunResult::Failed { check, .. } => {
            eprintln!("smoke test failed at check: {}", check);
            std::process::exit(1);
        }
    }
}
