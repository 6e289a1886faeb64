use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use shop_smoke::checks::{CheckOutput, SmokeCheck};
use shop_smoke::config::{DbConfig, DeployMode, SmokeConfig};
use shop_smoke::error::SmokeError;
use shop_smoke::runner::{run_all, RunResult};

/// Check double that records when it ran and fails on demand.
struct ScriptedCheck {
    name: &'static str,
    fail: bool,
    log: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl SmokeCheck for ScriptedCheck {
    fn name(&self) -> &str {
        self.name
    }

    async fn run(&self, _config: &SmokeConfig) -> Result<CheckOutput, SmokeError> {
        self.log.lock().unwrap().push(self.name);
        if self.fail {
            Err(SmokeError::HealthCheck("scripted failure".to_string()))
        } else {
            Ok(CheckOutput(format!("{} output", self.name)))
        }
    }
}

fn scripted(
    log: &Arc<Mutex<Vec<&'static str>>>,
    name: &'static str,
    fail: bool,
) -> Box<dyn SmokeCheck> {
    Box::new(ScriptedCheck {
        name,
        fail,
        log: Arc::clone(log),
    })
}

fn any_config() -> SmokeConfig {
    SmokeConfig {
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

#[tokio::test]
async fn all_checks_run_in_order_when_passing() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let checks = vec![
        scripted(&log, "first", false),
        scripted(&log, "second", false),
        scripted(&log, "third", false),
    ];

    let result = run_all(&any_config(), &checks).await;

    assert!(result.passed());
    assert_eq!(*log.lock().unwrap(), ["first", "second", "third"]);
}

#[tokio::test]
async fn run_stops_at_first_failure() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let checks = vec![
        scripted(&log, "first", false),
        scripted(&log, "second", true),
        scripted(&log, "third", false),
    ];

    let result = run_all(&any_config(), &checks).await;

    match result {
        RunResult::Failed { check, error } => {
            assert_eq!(check, "second");
            assert!(matches!(error, SmokeError::HealthCheck(_)));
        }
        RunResult::Passed => panic!("run should have failed"),
    }
    // Nothing downstream of the failure executed
    assert_eq!(*log.lock().unwrap(), ["first", "second"]);
}

#[tokio::test]
async fn failing_first_check_blocks_everything_else() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let checks = vec![
        scripted(&log, "health", true),
        scripted(&log, "orders query", false),
    ];

    let result = run_all(&any_config(), &checks).await;

    assert!(!result.passed());
    assert_eq!(*log.lock().unwrap(), ["health"]);
}
