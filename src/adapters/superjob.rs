use crate::adapters::http::ApiClient;
use crate::config::app::SuperJobConfig;
use crate::domain::model::{PageSignal, SalaryRange, Vacancy, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

const API_KEY_HEADER: &str = "X-Api-App-Id";
// srws=1: 在職缺標題中搜尋
const SEARCH_IN_TITLE: &str = "1";

#[derive(Debug, Deserialize)]
struct SjPage {
    #[serde(default)]
    objects: Vec<SjVacancy>,
    total: u64,
    #[serde(default)]
    more: bool,
}

#[derive(Debug, Deserialize)]
struct SjVacancy {
    id: u64,
    #[serde(default)]
    profession: String,
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl From<SjVacancy> for Vacancy {
    fn from(raw: SjVacancy) -> Self {
        Vacancy {
            id: raw.id.to_string(),
            title: raw.profession,
            salary: Some(SalaryRange {
                from: raw.payment_from,
                to: raw.payment_to,
                currency: raw.currency,
            }),
        }
    }
}

/// SuperJob vacancy search; pages end when the `more` flag turns false.
pub struct SuperJobSource {
    client: ApiClient,
    config: SuperJobConfig,
    api_key: String,
}

impl SuperJobSource {
    pub fn new(client: ApiClient, config: SuperJobConfig, api_key: String) -> Self {
        Self {
            client,
            config,
            api_key,
        }
    }

    fn build_query(&self, language: &str, page: u32) -> Vec<(String, String)> {
        let mut query = Vec::new();
        for (idx, keyword) in [self.config.role_keyword.as_str(), language]
            .into_iter()
            .enumerate()
        {
            query.push((format!("keywords[{}][srws]", idx), SEARCH_IN_TITLE.to_string()));
            query.push((format!("keywords[{}][skwc]", idx), "and".to_string()));
            query.push((format!("keywords[{}][keys]", idx), keyword.to_string()));
        }
        query.push(("catalogues".to_string(), self.config.catalogue.to_string()));
        query.push(("town".to_string(), self.config.town.to_string()));
        query.push(("page".to_string(), page.to_string()));
        if let Some(count) = self.config.count {
            query.push(("count".to_string(), count.to_string()));
        }
        query
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        "superjob"
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn target_currency(&self) -> &str {
        &self.config.target_currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let query = self.build_query(language, page);
        let raw: SjPage = self
            .client
            .get_json(
                &self.config.endpoint,
                &query,
                &[(API_KEY_HEADER, self.api_key.as_str())],
            )
            .await?;

        let signal = if raw.more {
            PageSignal::MorePagesRemain(page + 1)
        } else {
            PageSignal::NoMorePages
        };

        Ok(VacancyPage {
            vacancies: raw.objects.into_iter().map(Vacancy::from).collect(),
            total_found: raw.total,
            signal,
        })
    }
}
