use crate::domain::model::{PageSignal, Vacancy};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The source reported `found` vacancies, not more than the threshold.
    BelowThreshold { found: u64 },
    Fetched {
        vacancies: Vec<Vacancy>,
        total_found: u64,
    },
}

/// Walks every result page for `language`, starting at page 0.
///
/// Each page's reported total is checked against `popularity_threshold`; as soon
/// as one is not above it the walk stops and everything gathered so far is
/// dropped. Otherwise pages are requested one after another until the source
/// answers with [`PageSignal::NoMorePages`].
pub async fn fetch_all<S>(
    source: &S,
    language: &str,
    popularity_threshold: u64,
) -> Result<FetchOutcome>
where
    S: VacancySource + ?Sized,
{
    let mut vacancies = Vec::new();
    let mut page = 0;

    let total_found = loop {
        tracing::debug!("{}: requesting page {} for {}", source.name(), page, language);
        let result = source.fetch_page(language, page).await?;

        if result.total_found <= popularity_threshold {
            tracing::debug!(
                "{}: {} has {} vacancies, threshold is {}",
                source.name(),
                language,
                result.total_found,
                popularity_threshold
            );
            return Ok(FetchOutcome::BelowThreshold {
                found: result.total_found,
            });
        }

        vacancies.extend(result.vacancies);

        match result.signal {
            PageSignal::MorePagesRemain(next) => page = next,
            PageSignal::NoMorePages => break result.total_found,
        }
    };

    tracing::debug!(
        "{}: collected {} of {} vacancies for {}",
        source.name(),
        vacancies.len(),
        total_found,
        language
    );

    Ok(FetchOutcome::Fetched {
        vacancies,
        total_found,
    })
}
