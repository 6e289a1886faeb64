use crate::checks::SmokeCheck;
use crate::config::SmokeConfig;
use crate::error::SmokeError;

/// Terminal outcome of a whole run. No partial aggregation: the first
/// failure ends the sequence.
#[derive(Debug)]
pub enum RunResult {
    Passed,
    Failed { check: String, error: SmokeError },
}

impl RunResult {
    pub fn passed(&self) -> bool {
        matches!(self, RunResult::Passed)
    }
}

/// Run every check in order, printing a section banner before each one,
/// and stop at the first failure.
pub async fn run_all(config: &SmokeConfig, checks: &[Box<dyn SmokeCheck>]) -> RunResult {
    for check in checks {
        banner(check.name());

        match check.run(config).await {
            Ok(output) => {
                println!("{}", output.0);
                println!("✓ {} passed", check.name());
            }
            Err(error) => {
                println!("✗ {} FAILED", check.name());
                println!("{}", error);
                tracing::error!(check = check.name(), %error, "smoke check failed");
                return RunResult::Failed {
                    check: check.name().to_string(),
                    error,
                };
            }
        }
    }

    println!("{}", "=".repeat(60));
    println!("All smoke checks passed.");
    RunResult::Passed
}

fn banner(name: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", name);
    println!("{}", "=".repeat(60));
}
