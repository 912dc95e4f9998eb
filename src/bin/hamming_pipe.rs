use clap::Parser;
use sec_pipe::config::cli::normalize_args;
use sec_pipe::core::entry::BANNER;
use sec_pipe::domain::model::PairSelection;
use sec_pipe::utils::{logger, validation::Validate};
use sec_pipe::{CompareConfig, ComparePipeline, LocalStorage, PipelineEngine};

#[derive(Parser, Debug)]
#[command(name = "hamming_pipe")]
#[command(about = "Compare site A and site B FASTA files by Hamming distance")]
struct Args {
    /// path to your FASTA file from site 1 (also -s1)
    #[arg(long = "file_1", value_name = "PATH")]
    file_1: Option<String>,

    /// path to your FASTA file from site 2 (also -s2)
    #[arg(long = "file_2", value_name = "PATH")]
    file_2: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Output directory for the report
    #[arg(short, long)]
    output: Option<String>,

    /// Pairs to compare: diagonal, upper or all
    #[arg(long)]
    pairs: Option<String>,

    /// Extra report formats besides txt (json, csv)
    #[arg(long, value_delimiter = ',')]
    formats: Vec<String>,

    /// Log CPU and memory usage per phase
    #[arg(long)]
    monitor: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Show what would be compared without reading any file
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    /// 命令列參數覆蓋配置檔
    fn apply_to(&self, config: &mut CompareConfig) {
        if let Some(file_1) = &self.file_1 {
            config.sites.site_a = Some(file_1.clone());
        }
        if let Some(file_2) = &self.file_2 {
            config.sites.site_b = Some(file_2.clone());
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(pairs) = &self.pairs {
            config.compare.pairs = Some(pairs.clone());
        }
        if !self.formats.is_empty() {
            config.output.formats = Some(self.formats.clone());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_from(normalize_args(std::env::args_os()));

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    println!("{}", BANNER);

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match CompareConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(e.exit_code());
                }
            }
        }
        None => CompareConfig::default(),
    };
    args.apply_to(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be read or written");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor || config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ComparePipeline::new(storage, config);
    let engine = PipelineEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Comparison completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Comparison failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &CompareConfig) {
    tracing::info!("📋 Pipeline: {}", config.pipeline.name);
    tracing::info!("   Site A: {}", config.site_a().unwrap_or("-"));
    tracing::info!("   Site B: {}", config.site_b().unwrap_or("-"));
    tracing::info!("   Pairs: {}", config.pair_selection());
    tracing::info!(
        "   Output: {}/{} ({})",
        config.output_path(),
        config.report_filename(),
        config.output_formats().join(", ")
    );
}

fn perform_dry_run(config: &CompareConfig) {
    let rule = match config.pair_selection() {
        PairSelection::Diagonal => "A_i vs B_i",
        PairSelection::Upper => "A_i vs B_j for every j >= i",
        PairSelection::All => "every A_i vs every B_j",
    };
    println!(
        "Would compare {} with {}",
        config.site_a().unwrap_or("-"),
        config.site_b().unwrap_or("-")
    );
    println!("Pairs: {}", rule);
    println!("Report: {}/{}", config.output_path(), config.report_filename());
}
