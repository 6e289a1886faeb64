use async_trait::async_trait;

use super::command::run_command;
use super::{CheckOutput, SmokeCheck};
use crate::config::{DbConfig, SmokeConfig};
use crate::error::SmokeError;

/// Run a literal SQL statement through the `psql` command-line client and
/// require a zero exit status.
pub struct QueryCheck {
    name: &'static str,
    sql: &'static str,
}

impl QueryCheck {
    pub fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }
}

fn psql_args(db: &DbConfig, sql: &str) -> Vec<String> {
    vec![
        "-h".to_string(),
        db.host.clone(),
        "-p".to_string(),
        db.port.to_string(),
        "-U".to_string(),
        db.user.clone(),
        "-d".to_string(),
        db.database.clone(),
        "-c".to_string(),
        sql.to_string(),
    ]
}

#[async_trait]
impl SmokeCheck for QueryCheck {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(&self, config: &SmokeConfig) -> Result<CheckOutput, SmokeError> {
        let args = psql_args(&config.db, self.sql);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        // The password goes through the child environment, not argv.
        let output = run_command(
            "psql",
            &args,
            &[("PGPASSWORD", config.db.password.as_str())],
            None,
        )
        .await?;

        if !output.success {
            return Err(SmokeError::Query {
                context: self.name.to_string(),
                output: output.combined,
            });
        }

        Ok(CheckOutput(output.combined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> DbConfig {
        DbConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "app".to_string(),
            password: "password".to_string(),
            database: "shop".to_string(),
        }
    }

    #[test]
    fn test_psql_args_carry_connection_params() {
        let args = psql_args(&db(), "SELECT now()");
        assert_eq!(
            args,
            ["-h", "localhost", "-p", "5432", "-U", "app", "-d", "shop", "-c", "SELECT now()"]
        );
    }

    #[test]
    fn test_password_never_on_command_line() {
        let args = psql_args(&db(), "SELECT * FROM orders LIMIT 5");
        assert!(!args.iter().any(|a| a.contains("password")));
    }
}
