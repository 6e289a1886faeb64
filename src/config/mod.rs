use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Where the stack under test is running. Container mode resolves
/// service hostnames over the compose network instead of localhost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeployMode {
    Local,
    Container,
}

impl DeployMode {
    /// Only the literal "container" selects container defaults; any other
    /// value (or no argument at all) falls back to local.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("container") => DeployMode::Container,
            _ => DeployMode::Local,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

/// Resolved once at startup, immutable for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    pub mode: DeployMode,
    pub api_url: String,
    pub db: DbConfig,
    pub etl_script: PathBuf,
    /// Working directory for the ETL subprocess; `None` inherits the
    /// caller's current directory.
    pub work_dir: Option<PathBuf>,
}

impl SmokeConfig {
    pub fn resolve(mode: DeployMode) -> Self {
        // Set defaults based on mode, then override with specific env vars
        match mode {
            DeployMode::Local => Self::local(),
            DeployMode::Container => Self::container(),
        }
        .with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("API_URL") {
            self.api_url = v;
        }
        if let Some(v) = lookup("POSTGRES_HOST") {
            self.db.host = v;
        }
        if let Some(v) = lookup("POSTGRES_PORT") {
            self.db.port = v.parse().unwrap_or(self.db.port);
        }
        if let Some(v) = lookup("POSTGRES_USER") {
            self.db.user = v;
        }
        if let Some(v) = lookup("POSTGRES_PASSWORD") {
            self.db.password = v;
        }
        if let Some(v) = lookup("POSTGRES_DB") {
            self.db.database = v;
        }
        if let Some(v) = lookup("ETL_SCRIPT") {
            self.etl_script = PathBuf::from(v);
        }

        self
    }

    fn local() -> Self {
        Self {
            mode: DeployMode::Local,
            api_url: "http://127.0.0.1:8000".to_string(),
            db: DbConfig {
                host: "localhost".to_string(),
                port: 5432,
                user: "app".to_string(),
                password: "password".to_string(),
                database: "shop".to_string(),
            },
            etl_script: PathBuf::from("./app/etl.py"),
            work_dir: None,
        }
    }

    fn container() -> Self {
        Self {
            mode: DeployMode::Container,
            api_url: "http://app:8000".to_string(),
            db: DbConfig {
                host: "postgres".to_string(),
                port: 5432,
                user: "app".to_string(),
                password: "password".to_string(),
                database: "shop".to_string(),
            },
            etl_script: PathBuf::from("/work/app/etl.py"),
            work_dir: Some(PathBuf::from("/work")),
        }
    }
}
