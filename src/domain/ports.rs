use crate::domain::model::{CommandOutcome, DistanceReport, SitePair};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Location a relative path resolves to, for reporting.
    fn location(&self, path: &str) -> String;
}

/// Runs a shell command line and waits for it to finish.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> Result<CommandOutcome>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SitePair>;
    async fn transform(&self, data: SitePair) -> Result<DistanceReport>;
    async fn load(&self, report: DistanceReport) -> Result<String>;
}
