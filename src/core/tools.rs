use crate::domain::ports::ToolRunner;
use crate::utils::error::{NudgeError, Result};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs tools as child processes on the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

#[async_trait]
impl ToolRunner for SystemToolRunner {
    async fn run(&self, tool: &str, args: &[String]) -> Result<()> {
        tracing::debug!("running: {} {}", tool, args.join(" "));

        let status = Command::new(tool)
            .args(args)
            .status()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => NudgeError::ToolNotFound {
                    tool: tool.to_string(),
                },
                _ => NudgeError::IoError(e),
            })?;

        if !status.success() {
            return Err(NudgeError::ToolFailed {
                tool: tool.to_string(),
                status: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }

    async fn lookup(&self, tool: &str) -> Result<()> {
        let status = Command::new("which")
            .arg(tool)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;

        if !status.success() {
            return Err(NudgeError::ToolNotFound {
                tool: tool.to_string(),
            });
        }

        Ok(())
    }
}
