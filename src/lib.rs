pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::headhunter::HeadHunterSource;
pub use adapters::http::{ApiClient, Timeouts};
pub use adapters::render::ReportFormat;
pub use adapters::superjob::SuperJobSource;
pub use config::cli::LocalStorage;
pub use config::{AppConfig, SourceSelection};
pub use crate::core::etl::StatsEngine;
pub use crate::core::report::{build_report, language_outcome};
pub use utils::error::{Result, StatsError};
