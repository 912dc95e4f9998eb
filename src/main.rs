use sec_pipe::utils::logger;
use sec_pipe::{CliConfig, EntryPoint, ShellRunner};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse_args();

    // 日誌寫到 stderr，RUST_LOG 可調整
    logger::init_cli_logger(false);
    tracing::debug!("CLI config: {:?}", config);

    let entry = EntryPoint::new(ShellRunner::new());
    let mut stdout = std::io::stdout();

    if let Err(e) = entry.run(&config, &mut stdout).await {
        tracing::error!(
            "❌ Pipeline entry failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code().max(1));
    }
}
