use async_trait::async_trait;
use serde_json::Value;

use super::{CheckOutput, SmokeCheck};
use crate::config::SmokeConfig;
use crate::error::SmokeError;

/// GET `<api_url>/health` and require a JSON body reporting readiness.
pub struct HealthCheck;

/// True when the body parses as JSON with `"ok": true`.
pub fn health_ready(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .map(|v| v.get("ok").and_then(Value::as_bool) == Some(true))
        .unwrap_or(false)
}

#[async_trait]
impl SmokeCheck for HealthCheck {
    fn name(&self) -> &str {
        "health"
    }

    async fn run(&self, config: &SmokeConfig) -> Result<CheckOutput, SmokeError> {
        let url = format!("{}/health", config.api_url);
        tracing::debug!(%url, "GET");

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| SmokeError::HealthCheck(format!("GET {} failed: {}", url, e)))?;
        let body = response
            .text()
            .await
            .map_err(|e| SmokeError::HealthCheck(format!("reading body from {} failed: {}", url, e)))?;

        if body.is_empty() {
            return Err(SmokeError::HealthCheck(format!("empty body from {}", url)));
        }
        if !health_ready(&body) {
            return Err(SmokeError::HealthCheck(format!(
                "{} did not report \"ok\": true, got: {}",
                url, body
            )));
        }

        Ok(CheckOutput(body))
    }
}
