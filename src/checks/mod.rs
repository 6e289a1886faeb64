pub mod command;
mod etl;
mod health;
mod query;

pub use etl::{etl_complete, EtlCheck, ETL_DONE_MARKER};
pub use health::{health_ready, HealthCheck};
pub use query::QueryCheck;

use async_trait::async_trait;

use crate::config::SmokeConfig;
use crate::error::SmokeError;

/// Captured stdout/stderr text the check's predicate judged.
#[derive(Debug)]
pub struct CheckOutput(pub String);

/// A single named smoke check. Predicates must be evaluable purely from
/// the captured output text and exit status; no hidden state.
#[async_trait]
pub trait SmokeCheck: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self, config: &SmokeConfig) -> Result<CheckOutput, SmokeError>;
}

/// The production check sequence, in dependency order: later checks
/// assume the ones before them passed (the ETL needs the service up and
/// the database reachable).
pub fn standard_checks() -> Vec<Box<dyn SmokeCheck>> {
    vec![
        Box::new(HealthCheck),
        Box::new(QueryCheck::new("orders query", "SELECT * FROM orders LIMIT 5")),
        Box::new(QueryCheck::new("now() query", "SELECT now()")),
        Box::new(EtlCheck),
    ]
}
