use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::SmokeError;

/// Captured result of a finished subprocess.
#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    /// stdout followed by stderr, lossily decoded.
    pub combined: String,
}

/// Spawn a command, wait for it to finish, and capture its output.
///
/// Extra environment variables go through `envs` so secrets never appear
/// in process listings. No timeout: an unreachable database or a hung
/// interpreter blocks the run until the child exits.
pub async fn run_command(
    program: &str,
    args: &[&str],
    envs: &[(&str, &str)],
    work_dir: Option<&Path>,
) -> Result<CommandOutput, SmokeError> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in envs {
        cmd.env(key, value);
    }
    if let Some(dir) = work_dir {
        cmd.current_dir(dir);
    }

    tracing::debug!(program, ?args, "running command");

    let output = cmd.output().await.map_err(|source| SmokeError::Spawn {
        program: program.to_string(),
        source,
    })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CommandOutput {
        success: output.status.success(),
        combined,
    })
}
