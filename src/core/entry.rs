use crate::config::CliConfig;
use crate::domain::model::CommandOutcome;
use crate::domain::ports::CommandRunner;
use crate::utils::error::Result;
use std::io::Write;

pub const BANNER: &str = "~ STARTING THE PIPELINE ~";

/// Directory listing run on every invocation.
pub const LISTING_COMMAND: &str = "ls";

/// The `sec-pipe` entry point: print the banner, then run the listing command
/// once. The site paths are carried along but never opened or checked.
pub struct EntryPoint<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> EntryPoint<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub async fn run<W: Write>(&self, config: &CliConfig, out: &mut W) -> Result<CommandOutcome> {
        writeln!(out, "{}", BANNER)?;
        out.flush()?;

        tracing::debug!(
            "Site paths: file_1={:?}, file_2={:?}",
            config.file_1,
            config.file_2
        );

        let outcome = self.runner.run(LISTING_COMMAND).await?;
        if !outcome.success {
            tracing::warn!(
                "⚠️ '{}' exited with status {:?}",
                outcome.command,
                outcome.code
            );
        }

        Ok(outcome)
    }
}
