use crate::domain::model::VacancyPage;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn popularity_threshold(&self) -> u64;
    fn languages(&self) -> &[String];
    fn concurrent_languages(&self) -> usize;
}

/// A job board that can be queried one page at a time.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Short machine name, used for output file names.
    fn name(&self) -> &str;

    /// Human readable title printed above the report.
    fn title(&self) -> &str;

    /// Currency code salaries must be stated in to be counted.
    fn target_currency(&self) -> &str;

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;
}
