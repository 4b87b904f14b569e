use clap::Parser;
use mutual_follows::app::presenter::{JsonPresenter, Presenter, TextPresenter};
use mutual_follows::utils::{logger, validation::Validate};
use mutual_follows::{find_mutuals, CliConfig, GitHubDirectory, MutualResolver, OutputFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let settings = match cli.load_settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let directory = GitHubDirectory::new(&settings)?;
    let resolver = MutualResolver::new(directory);
    let input = cli.username_input();

    let stdout = std::io::stdout();
    let mut presenter: Box<dyn Presenter> = match settings.output_format() {
        OutputFormat::Text => Box::new(TextPresenter::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonPresenter::new(stdout.lock())),
    };

    match find_mutuals(&resolver, &input, presenter.as_mut()).await {
        Ok(resolution) => {
            tracing::info!(
                "✅ Found {} mutual followers{}",
                resolution.result.mutual_followers().len(),
                if resolution.is_fallback() { " (mock data)" } else { "" }
            );
        }
        Err(e) => {
            tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
