use clap::Parser;
use lang_salary_stats::utils::logger;
use lang_salary_stats::{
    ApiClient, CliConfig, HeadHunterSource, LocalStorage, StatsEngine, StatsError, SuperJobSource,
};

#[tokio::main]
async fn main() {
    // .env 中的 SUPERJOB_API_KEY 等設定要在解析參數前載入
    dotenv::dotenv().ok();

    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting lang-salary-stats");
    tracing::debug!("CLI config: {:?}", cli.source);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), StatsError> {
    // 設定錯誤必須在任何網路請求之前發現
    let config = cli.resolve()?;
    let client = ApiClient::new(config.timeouts())?;

    let storage = cli.output_path.clone().map(LocalStorage::new);
    let mut engine = StatsEngine::new(config.clone(), cli.format, storage);

    if cli.source.includes_headhunter() {
        engine = engine.with_source(Box::new(HeadHunterSource::new(
            client.clone(),
            config.headhunter.clone(),
        )));
    }
    if cli.source.includes_superjob() {
        let api_key = config.superjob_api_key()?.to_string();
        engine = engine.with_source(Box::new(SuperJobSource::new(
            client,
            config.superjob.clone(),
            api_key,
        )));
    }

    let reports = engine.run().await?;
    tracing::info!("✅ Finished, {} report(s) built", reports.len());
    Ok(())
}
