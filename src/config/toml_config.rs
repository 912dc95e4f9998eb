use crate::domain::model::PairSelection;
use crate::utils::error::{PipeError, Result};
use crate::utils::validation::{self, Validate, FASTA_EXTENSIONS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_REPORT_FILENAME: &str = "HAMMING_A_B.txt";
pub const OUTPUT_FORMATS: [&str; 3] = ["txt", "json", "csv"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default)]
    pub pipeline: PipelineInfo,
    #[serde(default)]
    pub sites: SitesConfig,
    #[serde(default)]
    pub compare: CompareOptions,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineInfo {
    pub name: String,
    pub description: Option<String>,
}

impl Default for PipelineInfo {
    fn default() -> Self {
        Self {
            name: "site-comparison".to_string(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitesConfig {
    pub site_a: Option<String>,
    pub site_b: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareOptions {
    pub pairs: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub filename: Option<String>,
    pub formats: Option<Vec<String>>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            filename: None,
            formats: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"))
}

impl CompareConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${SITE_A_FASTA})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn site_a(&self) -> Option<&str> {
        self.sites.site_a.as_deref()
    }

    pub fn site_b(&self) -> Option<&str> {
        self.sites.site_b.as_deref()
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn report_filename(&self) -> &str {
        self.output.filename.as_deref().unwrap_or(DEFAULT_REPORT_FILENAME)
    }

    /// Selected output formats; the text report is always written.
    pub fn output_formats(&self) -> Vec<String> {
        let mut formats = vec!["txt".to_string()];
        for format in self.output.formats.iter().flatten() {
            let format = format.to_ascii_lowercase();
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        formats
    }

    /// Report filename for a format: the text report keeps the configured
    /// name, other formats swap the extension (`HAMMING_A_B.json`).
    pub fn report_filename_for(&self, format: &str) -> String {
        if format == "txt" {
            return self.report_filename().to_string();
        }
        Path::new(self.report_filename())
            .with_extension(format)
            .to_string_lossy()
            .to_string()
    }

    pub fn writes_format(&self, format: &str) -> bool {
        self.output_formats().iter().any(|f| f == format)
    }

    /// 未設定時沿用 upper (j >= i)
    pub fn pair_selection(&self) -> PairSelection {
        self.compare
            .pairs
            .as_deref()
            .and_then(PairSelection::parse)
            .unwrap_or_default()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for CompareConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        let site_a = validation::validate_required_field("sites.site_a", &self.sites.site_a)?;
        let site_b = validation::validate_required_field("sites.site_b", &self.sites.site_b)?;
        validation::validate_path("sites.site_a", site_a)?;
        validation::validate_path("sites.site_b", site_b)?;

        // 未替換的 ${VAR} 代表環境變數缺失
        for (field, value) in [("sites.site_a", site_a), ("sites.site_b", site_b)] {
            if env_var_pattern().is_match(value) {
                return Err(PipeError::ConfigError {
                    message: format!("{} references an unset environment variable: {}", field, value),
                });
            }
        }

        validation::validate_file_extensions(
            "sites",
            &[site_a.clone(), site_b.clone()],
            FASTA_EXTENSIONS,
        )?;

        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_non_empty_string("output.filename", self.report_filename())?;

        if let Some(pairs) = &self.compare.pairs {
            validation::validate_one_of(
                "compare.pairs",
                &pairs.trim().to_ascii_lowercase(),
                &PairSelection::NAMES,
            )?;
        }

        for format in self.output_formats() {
            validation::validate_one_of("output.formats", &format, &OUTPUT_FORMATS)?;
            // 其他格式不可覆蓋文字報告
            if format != "txt" && self.report_filename_for(&format) == self.report_filename() {
                return Err(PipeError::InvalidConfigValueError {
                    field: "output.filename".to_string(),
                    value: self.report_filename().to_string(),
                    reason: format!("the {} report would overwrite the text report", format),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[pipeline]
name = "test-comparison"

[sites]
site_a = "data/site_a.fa"
site_b = "data/site_b.fasta"

[compare]
pairs = "all"

[output]
path = "./test-output"
formats = ["json", "csv"]
"#;

        let config = CompareConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "test-comparison");
        assert_eq!(config.site_a(), Some("data/site_a.fa"));
        assert_eq!(config.pair_selection(), PairSelection::All);
        assert_eq!(config.output_formats(), vec!["txt", "json", "csv"]);
        assert_eq!(config.report_filename(), DEFAULT_REPORT_FILENAME);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_empty_config() {
        let config = CompareConfig::from_toml_str("").unwrap();

        assert_eq!(config.output_path(), DEFAULT_OUTPUT_PATH);
        assert_eq!(config.pair_selection(), PairSelection::Upper);
        assert!(!config.monitoring_enabled());
        assert!(matches!(
            config.validate(),
            Err(PipeError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SEC_PIPE_TEST_SITE_A", "/data/hxb2_a.fa");

        let toml_content = r#"
[sites]
site_a = "${SEC_PIPE_TEST_SITE_A}"
site_b = "${SEC_PIPE_TEST_UNSET_SITE_B}"
"#;

        let config = CompareConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site_a(), Some("/data/hxb2_a.fa"));
        assert_eq!(config.site_b(), Some("${SEC_PIPE_TEST_UNSET_SITE_B}"));
        assert!(matches!(config.validate(), Err(PipeError::ConfigError { .. })));

        std::env::remove_var("SEC_PIPE_TEST_SITE_A");
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        let toml_content = r#"
[sites]
site_a = "a.fa"
site_b = "b.fa"

[compare]
pairs = "lower"
"#;
        let config = CompareConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let bad_format = r#"
[sites]
site_a = "a.fa"
site_b = "b.txt"
"#;
        let config = CompareConfig::from_toml_str(bad_format).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pairs_value_is_trimmed() {
        let toml_content = r#"
[sites]
site_a = "a.fa"
site_b = "b.fa"

[compare]
pairs = " All "
"#;
        let config = CompareConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.pair_selection(), PairSelection::All);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_report_filename_collision_is_rejected() {
        let toml_content = r#"
[sites]
site_a = "a.fa"
site_b = "b.fa"

[output]
filename = "HAMMING.json"
formats = ["json"]
"#;
        let config = CompareConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.report_filename_for("json"), "HAMMING.json");
        assert!(matches!(
            config.validate(),
            Err(PipeError::InvalidConfigValueError { ref field, .. }) if field == "output.filename"
        ));

        let csv_only = r#"
[sites]
site_a = "a.fa"
site_b = "b.fa"

[output]
filename = "HAMMING.json"
formats = ["csv"]
"#;
        let config = CompareConfig::from_toml_str(csv_only).unwrap();
        assert_eq!(config.report_filename_for("csv"), "HAMMING.csv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_toml_error() {
        let err = CompareConfig::from_toml_str("[sites\nsite_a = 1").unwrap_err();
        assert!(matches!(err, PipeError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"

[sites]
site_a = "a.fa"
site_b = "b.fa"

[monitoring]
enabled = true
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = CompareConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
        assert!(config.monitoring_enabled());
    }
}
