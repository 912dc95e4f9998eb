use crate::domain::model::CommandOutcome;
use crate::domain::ports::CommandRunner;
use crate::utils::error::{PipeError, Result};
use async_trait::async_trait;
use tokio::process::Command;

/// Runs command lines through the platform shell with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<CommandOutcome> {
        tracing::debug!("Running shell command: {}", command);

        let status = Self::shell_command(command)
            .status()
            .await
            .map_err(|source| PipeError::CommandLaunch {
                command: command.to_string(),
                source,
            })?;

        Ok(CommandOutcome {
            command: command.to_string(),
            code: status.code(),
            success: status.success(),
        })
    }
}
