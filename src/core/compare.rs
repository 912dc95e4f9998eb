use crate::config::toml_config::CompareConfig;
use crate::core::{DistanceReport, Pipeline, SitePair, Storage};
use crate::domain::distance::pairwise;
use crate::domain::fasta::read_fasta;
use crate::domain::model::{Site, SiteSequences};
use crate::utils::error::{PipeError, Result};
use crate::utils::validation::validate_required_field;

/// Reads both sites' FASTA files, compares the selected pairs and writes the
/// Hamming report.
pub struct ComparePipeline<S: Storage> {
    storage: S,
    config: CompareConfig,
}

impl<S: Storage> ComparePipeline<S> {
    pub fn new(storage: S, config: CompareConfig) -> Self {
        Self { storage, config }
    }

    async fn load_site(&self, site: Site, path: &str) -> Result<SiteSequences> {
        tracing::info!("📥 Reading site {} sequences from {}", site, path);
        let records = read_fasta(path).await?;

        if records.is_empty() {
            return Err(PipeError::ProcessingError {
                message: format!("site {} file '{}' contains no sequences", site, path),
            });
        }

        tracing::info!("Site {} provided {} sequences", site, records.len());
        Ok(SiteSequences {
            site,
            source: path.to_string(),
            records,
        })
    }

    fn to_csv(report: &DistanceReport) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["site_a", "site_b", "a_header", "b_header", "distance"])?;
        for pair in &report.pairs {
            writer.write_record([
                pair.a_index.to_string(),
                pair.b_index.to_string(),
                pair.a_header.clone(),
                pair.b_header.clone(),
                pair.distance.to_string(),
            ])?;
        }
        writer.into_inner().map_err(|e| PipeError::ProcessingError {
            message: format!("failed to flush CSV report: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for ComparePipeline<S> {
    async fn extract(&self) -> Result<SitePair> {
        let site_a = validate_required_field("sites.site_a", &self.config.sites.site_a)?;
        let site_b = validate_required_field("sites.site_b", &self.config.sites.site_b)?;

        Ok(SitePair {
            site_a: self.load_site(Site::A, site_a).await?,
            site_b: self.load_site(Site::B, site_b).await?,
        })
    }

    async fn transform(&self, data: SitePair) -> Result<DistanceReport> {
        let selection = self.config.pair_selection();
        tracing::debug!(
            "Comparing {} x {} sequences ({} pairs)",
            data.site_a.len(),
            data.site_b.len(),
            selection
        );

        let pairs = pairwise(&data.site_a, &data.site_b, selection);

        Ok(DistanceReport {
            site_a_count: data.site_a.len(),
            site_b_count: data.site_b.len(),
            selection,
            pairs,
            generated_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    async fn load(&self, report: DistanceReport) -> Result<String> {
        let filename = self.config.report_filename().to_string();

        tracing::debug!("Writing {} report lines to {}", report.pairs.len(), filename);
        self.storage
            .write_file(&filename, report.to_text().as_bytes())
            .await?;

        if self.config.writes_format("json") {
            let json_name = self.config.report_filename_for("json");
            let json_data = serde_json::to_string_pretty(&report)?;
            self.storage.write_file(&json_name, json_data.as_bytes()).await?;
            tracing::debug!("JSON report saved to {}", json_name);
        }

        if self.config.writes_format("csv") {
            let csv_name = self.config.report_filename_for("csv");
            let csv_data = Self::to_csv(&report)?;
            self.storage.write_file(&csv_name, &csv_data).await?;
            tracing::debug!("CSV report saved to {}", csv_name);
        }

        Ok(self.storage.location(&filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files.get(path).map(|d| String::from_utf8_lossy(d).to_string())
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn location(&self, path: &str) -> String {
            format!("mock://{}", path)
        }
    }

    fn write_fasta(dir: &std::path::Path, name: &str, body: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().to_string()
    }

    fn config_for(site_a: String, site_b: String, formats: &[&str]) -> CompareConfig {
        let mut config = CompareConfig::default();
        config.sites.site_a = Some(site_a);
        config.sites.site_b = Some(site_b);
        config.output.formats = Some(formats.iter().map(|f| f.to_string()).collect());
        config
    }

    #[tokio::test]
    async fn test_extract_transform_load() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fasta(dir.path(), "a.fa", ">a0\nACGT\n>a1\nACGG\n");
        let b = write_fasta(dir.path(), "b.fa", ">b0\nACGT\n>b1\nTTTT\n");

        let storage = MockStorage::default();
        let pipeline = ComparePipeline::new(storage.clone(), config_for(a, b, &["json", "csv"]));

        let data = pipeline.extract().await.unwrap();
        assert_eq!(data.site_a.len(), 2);

        let report = pipeline.transform(data).await.unwrap();
        let lines: Vec<String> = report.pairs.iter().map(|p| p.report_line()).collect();
        assert_eq!(lines, vec!["A_0_B_0:0", "A_0_B_1:3", "A_1_B_1:4"]);

        let location = pipeline.load(report).await.unwrap();
        assert_eq!(location, "mock://HAMMING_A_B.txt");

        let text = storage.get_file("HAMMING_A_B.txt").await.unwrap();
        assert_eq!(text, "A_0_B_0:0\nA_0_B_1:3\nA_1_B_1:4\n");

        let json = storage.get_file("HAMMING_A_B.json").await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["selection"], "upper");
        assert_eq!(parsed["pairs"].as_array().unwrap().len(), 3);

        let csv = storage.get_file("HAMMING_A_B.csv").await.unwrap();
        assert!(csv.starts_with("site_a,site_b,a_header,b_header,distance\n"));
        assert!(csv.contains("0,1,a0,b1,3"));
    }

    #[tokio::test]
    async fn test_text_only_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fasta(dir.path(), "a.fa", ">a0\nAC\n");
        let b = write_fasta(dir.path(), "b.fa", ">b0\nAG\n");

        let storage = MockStorage::default();
        let pipeline = ComparePipeline::new(storage.clone(), config_for(a, b, &[]));
        let data = pipeline.extract().await.unwrap();
        let report = pipeline.transform(data).await.unwrap();
        pipeline.load(report).await.unwrap();

        assert_eq!(storage.get_file("HAMMING_A_B.txt").await.unwrap(), "A_0_B_0:1\n");
        assert!(storage.get_file("HAMMING_A_B.json").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_site_is_processing_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_fasta(dir.path(), "a.fa", ">a0\nACGT\n");
        let b = write_fasta(dir.path(), "b.fa", "");

        let pipeline = ComparePipeline::new(MockStorage::default(), config_for(a, b, &[]));
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, PipeError::ProcessingError { .. }));
    }

    #[tokio::test]
    async fn test_missing_site_path() {
        let pipeline = ComparePipeline::new(MockStorage::default(), CompareConfig::default());
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, PipeError::MissingConfigError { .. }));
    }
}
