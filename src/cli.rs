use clap::Parser;

use crate::checks::standard_checks;
use crate::config::{DeployMode, SmokeConfig};
use crate::runner::{run_all, RunResult};

#[derive(Parser)]
#[command(name = "shop-smoke")]
#[command(about = "Smoke tests for a deployed shop stack: API health, Postgres queries, ETL")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Deployment mode; \"container\" selects in-network defaults")]
    pub mode: Option<String>,
}

pub async fn run(cli: Cli) -> RunResult {
    let mode = DeployMode::from_arg(cli.mode.as_deref());
    let config = SmokeConfig::resolve(mode);
    tracing::info!(?mode, api_url = %config.api_url, db_host = %config.db.host, "running smoke checks");

    run_all(&config, &standard_checks()).await
}
