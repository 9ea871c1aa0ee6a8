use crate::adapters::http::Timeouts;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_POPULARITY_THRESHOLD: u64 = 100;

pub const DEFAULT_LANGUAGES: [&str; 15] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "C",
    "Go",
    "Objective-C",
    "Scala",
    "Swift",
    "TypeScript",
    "Kotlin",
    "1C",
];

const DEFAULT_ROLE_KEYWORD: &str = "Программист";

/// 要查詢哪些職缺網站
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SourceSelection {
    Hh,
    Superjob,
    #[default]
    All,
}

impl SourceSelection {
    pub fn includes_headhunter(self) -> bool {
        matches!(self, SourceSelection::Hh | SourceSelection::All)
    }

    pub fn includes_superjob(self) -> bool {
        matches!(self, SourceSelection::Superjob | SourceSelection::All)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub popularity_threshold: u64,
    pub languages: Vec<String>,
    pub concurrent_languages: usize,
    pub timeouts: TimeoutConfig,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub connect_ms: u64,
    pub read_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub title: String,
    pub endpoint: String,
    pub role_keyword: String,
    pub area: u32,
    pub per_page: Option<u32>,
    pub target_currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub title: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub role_keyword: String,
    pub town: u32,
    pub catalogue: u32,
    pub count: Option<u32>,
    pub target_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            popularity_threshold: DEFAULT_POPULARITY_THRESHOLD,
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            concurrent_languages: 1,
            timeouts: TimeoutConfig::default(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        let defaults = Timeouts::default();
        Self {
            connect_ms: defaults.connect.as_millis() as u64,
            read_seconds: defaults.read.as_secs(),
        }
    }
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            title: "HeadHunter Moscow".to_string(),
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            role_keyword: DEFAULT_ROLE_KEYWORD.to_string(),
            area: 1,
            per_page: None,
            target_currency: "RUR".to_string(),
        }
    }
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            title: "SuperJob Moscow".to_string(),
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            api_key: None,
            role_keyword: DEFAULT_ROLE_KEYWORD.to_string(),
            town: 4,
            catalogue: 48,
            count: None,
            target_currency: "rub".to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未填的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPERJOB_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_millis(self.timeouts.connect_ms),
            read: Duration::from_secs(self.timeouts.read_seconds),
        }
    }

    /// SuperJob 需要 API key，沒有就無法啟動
    pub fn superjob_api_key(&self) -> Result<&str> {
        let key = validation::validate_required_field("superjob.api_key", &self.superjob.api_key)?;
        validation::validate_non_empty_string("superjob.api_key", key)?;
        if key.starts_with("${") {
            return Err(StatsError::MissingConfigError {
                field: "superjob.api_key".to_string(),
            });
        }
        Ok(key)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_languages("languages", &self.languages)?;
        validation::validate_positive_number("concurrent_languages", self.concurrent_languages, 1)?;
        validation::validate_range("timeouts.connect_ms", self.timeouts.connect_ms, 1, 60_000)?;
        validation::validate_range("timeouts.read_seconds", self.timeouts.read_seconds, 1, 600)?;

        validation::validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validation::validate_non_empty_string(
            "headhunter.role_keyword",
            &self.headhunter.role_keyword,
        )?;
        validation::validate_non_empty_string(
            "headhunter.target_currency",
            &self.headhunter.target_currency,
        )?;
        if let Some(per_page) = self.headhunter.per_page {
            validation::validate_range("headhunter.per_page", per_page, 1, 100)?;
        }

        validation::validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validation::validate_non_empty_string("superjob.role_keyword", &self.superjob.role_keyword)?;
        validation::validate_non_empty_string(
            "superjob.target_currency",
            &self.superjob.target_currency,
        )?;
        if let Some(count) = self.superjob.count {
            validation::validate_range("superjob.count", count, 1, 100)?;
        }

        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn popularity_threshold(&self) -> u64 {
        self.popularity_threshold
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn concurrent_languages(&self) -> usize {
        self.concurrent_languages
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
