use thiserror::Error;

/// One variant per smoke check failure class. Every variant carries the
/// captured text that caused the failure judgment so a human can diagnose
/// from console output alone.
#[derive(Debug, Error)]
pub enum SmokeError {
    #[error("health check failed: {0}")]
    HealthCheck(String),

    #[error("{context} failed:\n{output}")]
    Query { context: String, output: String },

    /// A crashed ETL subprocess and a clean run that never printed the
    /// completion marker are deliberately not distinguished.
    #[error("ETL did not complete:\n{0}")]
    Etl(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
