pub mod app;
pub mod cli;

pub use app::{AppConfig, SourceSelection};

#[cfg(feature = "cli")]
use crate::adapters::render::ReportFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lang-salary-stats")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = SourceSelection::All)]
    pub source: SourceSelection,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, env = "POPULARITY_THRESHOLD", help = "Minimum vacancies for a language to be listed")]
    pub threshold: Option<u64>,

    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    #[arg(long, env = "SUPERJOB_API_KEY", hide_env_values = true)]
    pub superjob_api_key: Option<String>,

    #[arg(long)]
    pub concurrent_languages: Option<usize>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Write reports into this directory instead of stdout
    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 檔案、環境變數與命令列參數，並驗證結果
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(threshold) = self.threshold {
            config.popularity_threshold = threshold;
        }
        if !self.languages.is_empty() {
            config.languages = self.languages.clone();
        }
        if let Some(concurrent) = self.concurrent_languages {
            config.concurrent_languages = concurrent;
        }
        if let Some(key) = &self.superjob_api_key {
            config.superjob.api_key = Some(key.clone());
        }

        config.validate()?;
        if let Some(output_path) = &self.output_path {
            validate_path("output_path", output_path)?;
        }
        if self.source.includes_superjob() {
            config.superjob_api_key()?;
        }

        Ok(config)
    }
}
