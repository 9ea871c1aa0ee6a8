use crate::core::aggregate::aggregate;
use crate::core::fetcher::{fetch_all, FetchOutcome};
use crate::core::salary::estimate_range;
use crate::domain::model::{LanguageOutcome, LanguageStats, StatsReport};
use crate::domain::ports::{ConfigProvider, VacancySource};
use crate::utils::error::{Result, StatsError};
use futures::stream::{self, StreamExt, TryStreamExt};

/// Fetches and summarises a single language.
pub async fn language_outcome<S>(
    source: &S,
    language: &str,
    popularity_threshold: u64,
) -> Result<LanguageOutcome>
where
    S: VacancySource + ?Sized,
{
    let (vacancies, total_found) = match fetch_all(source, language, popularity_threshold).await? {
        FetchOutcome::BelowThreshold { found } => {
            return Ok(LanguageOutcome::BelowThreshold { found });
        }
        FetchOutcome::Fetched {
            vacancies,
            total_found,
        } => (vacancies, total_found),
    };

    let target_currency = source.target_currency();
    let summary = aggregate(
        vacancies
            .iter()
            .map(|vacancy| estimate_range(vacancy.salary.as_ref(), target_currency)),
    );

    Ok(LanguageOutcome::Tracked(LanguageStats {
        vacancies_found: total_found,
        vacancies_processed: summary.processed.min(total_found),
        average_salary: summary.average,
    }))
}

/// Builds the per-language report for one source.
///
/// Languages are looked up in configured order. With `concurrent_languages`
/// above one, several languages are in flight at once, but the report still
/// lists them in configured order. The first failed request aborts the build.
pub async fn build_report<S, C>(source: &S, config: &C) -> Result<StatsReport>
where
    S: VacancySource + ?Sized,
    C: ConfigProvider,
{
    let threshold = config.popularity_threshold();
    let concurrency = config.concurrent_languages().max(1);

    tracing::info!(
        "📊 Collecting {} for {} languages (threshold {})",
        source.title(),
        config.languages().len(),
        threshold
    );

    let outcomes: Vec<(&str, LanguageOutcome)> = stream::iter(config.languages())
        .map(|language| async move {
            let outcome = language_outcome(source, language, threshold).await?;
            Ok::<_, StatsError>((language.as_str(), outcome))
        })
        .buffered(concurrency)
        .try_collect()
        .await?;

    let mut report = StatsReport::new(source.title());
    for (language, outcome) in outcomes {
        match &outcome {
            LanguageOutcome::Tracked(stats) => tracing::info!(
                "✅ {}: found {}, processed {}, average {}",
                language,
                stats.vacancies_found,
                stats.vacancies_processed,
                stats.average_salary
            ),
            LanguageOutcome::BelowThreshold { found } => {
                tracing::info!("⏭️ {}: only {} vacancies, skipped", language, found)
            }
        }
        report.record(language, outcome);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{vacancy, ScriptedSource};
    use crate::domain::model::{PageSignal, SalaryRange};
    use std::time::Duration;

    struct TestConfig {
        threshold: u64,
        languages: Vec<String>,
        concurrency: usize,
    }

    impl TestConfig {
        fn new(threshold: u64, languages: &[&str]) -> Self {
            Self {
                threshold,
                languages: languages.iter().map(|l| l.to_string()).collect(),
                concurrency: 1,
            }
        }
    }

    impl ConfigProvider for TestConfig {
        fn popularity_threshold(&self) -> u64 {
            self.threshold
        }

        fn languages(&self) -> &[String] {
            &self.languages
        }

        fn concurrent_languages(&self) -> usize {
            self.concurrency
        }
    }

    #[tokio::test]
    async fn test_language_below_threshold_is_omitted() {
        let source = ScriptedSource::new().page("Ruby", 0, 50, 20, PageSignal::NoMorePages);
        let config = TestConfig::new(100, &["Ruby"]);

        let report = build_report(&source, &config).await.unwrap();

        assert!(report.is_empty());
        assert!(report.get("Ruby").is_none());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].found, 50);
    }

    #[tokio::test]
    async fn test_salaries_are_estimated_and_averaged() {
        let vacancies = vec![
            vacancy(
                "1",
                Some(SalaryRange::new(Some(100_000.0), Some(200_000.0), Some("RUR"))),
            ),
            vacancy("2", Some(SalaryRange::new(None, Some(90_000.0), Some("RUR")))),
            vacancy("3", Some(SalaryRange::new(Some(80_000.0), None, Some("USD")))),
        ];
        let source =
            ScriptedSource::new().page_with("Python", 0, 150, vacancies, PageSignal::NoMorePages);
        let config = TestConfig::new(100, &["Python"]);

        let report = build_report(&source, &config).await.unwrap();

        assert_eq!(
            report.get("Python"),
            Some(&LanguageStats {
                vacancies_found: 150,
                vacancies_processed: 2,
                average_salary: 111_000,
            })
        );
    }

    #[tokio::test]
    async fn test_language_without_salaries_has_zero_average() {
        let source = ScriptedSource::new().page("Go", 0, 400, 3, PageSignal::NoMorePages);
        let config = TestConfig::new(100, &["Go"]);

        let report = build_report(&source, &config).await.unwrap();

        let stats = report.get("Go").unwrap();
        assert_eq!(stats.vacancies_found, 400);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[tokio::test]
    async fn test_report_keeps_configured_order() {
        let source = ScriptedSource::new()
            .page("Scala", 0, 300, 1, PageSignal::NoMorePages)
            .page("1C", 0, 10, 1, PageSignal::NoMorePages)
            .page("Java", 0, 900, 1, PageSignal::NoMorePages)
            .page("C", 0, 200, 1, PageSignal::NoMorePages);
        let config = TestConfig::new(100, &["Scala", "1C", "Java", "C"]);

        let report = build_report(&source, &config).await.unwrap();

        assert_eq!(report.language_names(), vec!["Scala", "Java", "C"]);
        assert_eq!(
            source.requested_languages(),
            vec!["Scala", "1C", "Java", "C"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_build_keeps_configured_order() {
        // Kotlin is requested first but answers last
        let source = ScriptedSource::new()
            .page("Kotlin", 0, 300, 1, PageSignal::MorePagesRemain(1))
            .page("Kotlin", 1, 300, 1, PageSignal::NoMorePages)
            .page("PHP", 0, 500, 1, PageSignal::NoMorePages)
            .page("Swift", 0, 250, 1, PageSignal::NoMorePages)
            .delay("Kotlin", Duration::from_millis(50));
        let mut config = TestConfig::new(100, &["Kotlin", "PHP", "Swift"]);
        config.concurrency = 3;

        let report = build_report(&source, &config).await.unwrap();

        assert_eq!(report.language_names(), vec!["Kotlin", "PHP", "Swift"]);
        assert_eq!(source.requested_pages("Kotlin"), vec![0, 1]);
        // PHP and Swift were answered while Kotlin's first page was pending
        assert_eq!(
            source.request_log().last(),
            Some(&("Kotlin".to_string(), 1))
        );
    }

    #[tokio::test]
    async fn test_request_failure_aborts_report() {
        let source = ScriptedSource::new().page("Java", 0, 900, 1, PageSignal::NoMorePages);
        let config = TestConfig::new(100, &["Java", "Python"]);

        let result = build_report(&source, &config).await;

        assert!(result.is_err());
    }
}
