use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a [`Pipeline`] through extract, transform and load.
pub struct PipelineEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> PipelineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting comparison pipeline");
        self.monitor.log_stats("Start");

        // Extract
        tracing::info!("Reading site sequences...");
        let sites = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} sequences from site A and {} from site B",
            sites.site_a.len(),
            sites.site_b.len()
        );
        self.monitor.log_stats("Extract");

        // Transform
        tracing::info!("Computing Hamming distances...");
        let report = self.pipeline.transform(sites).await?;
        tracing::info!("Compared {} sequence pairs", report.pairs.len());
        self.monitor.log_stats("Transform");

        // Load
        tracing::info!("Writing report...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("📁 Report saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
