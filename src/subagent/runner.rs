use async_trait::async_trait;
use std::time::Duration;

/// Raw result of one isolated agent invocation.
///
/// Host runtimes differ on shape: some hand back captured stdout as plain
/// text, others a structured record. Normalized by the spawner before any
/// other code touches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    Text(String),
    Structured {
        stdout: Option<String>,
        stderr: String,
        exit_code: i32,
    },
}

/// Process-execution primitive for isolated sub-agent runs.
///
/// The timeout is enforced here, not by the caller; a timed-out run
/// surfaces as an error like any other execution failure.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run_with_timeout(
        &self,
        command_line: &str,
        timeout: Duration,
    ) -> anyhow::Result<ExecResult>;
}

/// Runs the command line through the local shell.
pub struct NativeRunner;

#[async_trait]
impl ProcessRunner for NativeRunner {
    async fn run_with_timeout(
        &self,
        command_line: &str,
        timeout: Duration,
    ) -> anyhow::Result<ExecResult> {
        let mut cmd = tokio::process::Command::new("sh");
        cmd.arg("-c").arg(command_line);
        cmd.kill_on_drop(true);

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "sub-agent timed out after {}ms and was killed",
                    timeout.as_millis()
                )
            })??;

        Ok(ExecResult::Structured {
            stdout: Some(String::from_utf8_lossy(&output.stdout).to_string()),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
