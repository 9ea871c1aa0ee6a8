use crate::adapters::render::{render, ReportFormat};
use crate::core::report::build_report;
use crate::domain::model::StatsReport;
use crate::domain::ports::{ConfigProvider, Storage, VacancySource};
use crate::utils::error::Result;

/// Runs every configured source in turn and emits one report per source.
pub struct StatsEngine<C: ConfigProvider, St: Storage> {
    config: C,
    sources: Vec<Box<dyn VacancySource>>,
    format: ReportFormat,
    storage: Option<St>,
}

impl<C: ConfigProvider, St: Storage> StatsEngine<C, St> {
    /// Reports go to `storage` when given, otherwise to stdout.
    pub fn new(config: C, format: ReportFormat, storage: Option<St>) -> Self {
        Self {
            config,
            sources: Vec::new(),
            format,
            storage,
        }
    }

    pub fn with_source(mut self, source: Box<dyn VacancySource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Builds every source's report first; nothing is emitted unless all succeed.
    pub async fn run(&self) -> Result<Vec<StatsReport>> {
        let mut built = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            tracing::info!("🚀 Building report for {}", source.title());
            let report = build_report(source.as_ref(), &self.config).await?;
            let rendered = render(&report, self.format)?;
            built.push((source.name(), report, rendered));
        }

        let mut reports = Vec::with_capacity(built.len());
        for (name, report, rendered) in built {
            match &self.storage {
                Some(storage) => {
                    let file_name = format!("{}_stats.{}", name, self.format.extension());
                    storage.write_file(&file_name, rendered.as_bytes()).await?;
                    tracing::info!("📁 {} saved to {}", report.title, file_name);
                }
                None => println!("{}\n", rendered),
            }
            reports.push(report);
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::LocalStorage;
    use crate::config::AppConfig;
    use crate::core::test_support::ScriptedSource;
    use crate::domain::model::PageSignal;
    use tempfile::TempDir;

    fn config(languages: &[&str]) -> AppConfig {
        AppConfig {
            languages: languages.iter().map(|l| l.to_string()).collect(),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_run_writes_one_file_per_source() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().to_str().unwrap().to_string();
        let source = ScriptedSource::new()
            .page("Go", 0, 300, 2, PageSignal::NoMorePages)
            .page("1C", 0, 30, 2, PageSignal::NoMorePages);

        let engine = StatsEngine::new(
            config(&["Go", "1C"]),
            ReportFormat::Csv,
            Some(LocalStorage::new(output_path)),
        )
        .with_source(Box::new(source));

        let reports = engine.run().await.unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].language_names(), vec!["Go"]);
        let csv = std::fs::read_to_string(temp_dir.path().join("scripted_stats.csv")).unwrap();
        assert!(csv.contains("Go,300,0,0"));
        assert!(!csv.contains("1C"));
    }

    #[tokio::test]
    async fn test_run_fails_on_first_source_error() {
        let source = ScriptedSource::new();
        let engine = StatsEngine::new(config(&["Go"]), ReportFormat::Table, None::<LocalStorage>)
            .with_source(Box::new(source));

        assert!(engine.run().await.is_err());
    }

    #[tokio::test]
    async fn test_failed_source_leaves_no_output_behind() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().to_str().unwrap().to_string();
        let healthy = ScriptedSource::new()
            .named("healthy")
            .page("Go", 0, 300, 2, PageSignal::NoMorePages);
        let broken = ScriptedSource::new().named("broken");

        let engine = StatsEngine::new(
            config(&["Go"]),
            ReportFormat::Json,
            Some(LocalStorage::new(output_path)),
        )
        .with_source(Box::new(healthy))
        .with_source(Box::new(broken));

        assert!(engine.run().await.is_err());
        assert!(!temp_dir.path().join("healthy_stats.json").exists());
        assert!(!temp_dir.path().join("broken_stats.json").exists());
    }
}
