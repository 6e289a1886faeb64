use async_trait::async_trait;

use super::command::run_command;
use super::{CheckOutput, SmokeCheck};
use crate::config::SmokeConfig;
use crate::error::SmokeError;

/// Line the ETL script prints as its last act on a clean run.
pub const ETL_DONE_MARKER: &str = "ETL done.";

/// Run the ETL script as a subprocess and require the completion marker
/// somewhere in its combined stdout/stderr. The interpreter's exit code
/// is not inspected separately: a crash and a marker-less clean exit are
/// the same failure.
pub struct EtlCheck;

pub fn etl_complete(output: &str) -> bool {
    output.contains(ETL_DONE_MARKER)
}

#[async_trait]
impl SmokeCheck for EtlCheck {
    fn name(&self) -> &str {
        "ETL"
    }

    async fn run(&self, config: &SmokeConfig) -> Result<CheckOutput, SmokeError> {
        let db = &config.db;
        let port = db.port.to_string();
        // Re-export connection parameters so the script sees the same
        // database this run was configured with.
        let envs = [
            ("POSTGRES_HOST", db.host.as_str()),
            ("POSTGRES_PORT", port.as_str()),
            ("POSTGRES_USER", db.user.as_str()),
            ("POSTGRES_PASSWORD", db.password.as_str()),
            ("POSTGRES_DB", db.database.as_str()),
        ];

        let script = config.etl_script.to_string_lossy();
        let output = run_command(
            "python3",
            &[script.as_ref()],
            &envs,
            config.work_dir.as_deref(),
        )
        .await?;

        if !etl_complete(&output.combined) {
            return Err(SmokeError::Etl(output.combined));
        }

        Ok(CheckOutput(output.combined))
    }
}
