use crate::adapters::http::ApiClient;
use crate::config::app::HeadHunterConfig;
use crate::domain::model::{PageSignal, SalaryRange, Vacancy, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HhPage {
    #[serde(default)]
    items: Vec<HhVacancy>,
    found: u64,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct HhVacancy {
    id: String,
    #[serde(default)]
    name: String,
    salary: Option<HhSalary>,
}

#[derive(Debug, Deserialize)]
struct HhSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl From<HhVacancy> for Vacancy {
    fn from(raw: HhVacancy) -> Self {
        Vacancy {
            id: raw.id,
            title: raw.name,
            salary: raw.salary.map(|s| SalaryRange {
                from: s.from,
                to: s.to,
                currency: s.currency,
            }),
        }
    }
}

/// HeadHunter public vacancy search; pages end at the reported page count.
pub struct HeadHunterSource {
    client: ApiClient,
    config: HeadHunterConfig,
}

impl HeadHunterSource {
    pub fn new(client: ApiClient, config: HeadHunterConfig) -> Self {
        Self { client, config }
    }

    fn build_query(&self, language: &str, page: u32) -> Vec<(String, String)> {
        let role = &self.config.role_keyword;
        let mut query = vec![
            (
                "text".to_string(),
                format!("\"{} {}\" OR \"{} {}\"", role, language, language, role),
            ),
            ("search_field".to_string(), "name".to_string()),
            ("area".to_string(), self.config.area.to_string()),
            ("page".to_string(), page.to_string()),
        ];
        if let Some(per_page) = self.config.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        query
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    fn name(&self) -> &str {
        "headhunter"
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn target_currency(&self) -> &str {
        &self.config.target_currency
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        let query = self.build_query(language, page);
        let raw: HhPage = self
            .client
            .get_json(&self.config.endpoint, &query, &[])
            .await?;

        let signal = if page + 1 < raw.pages {
            PageSignal::MorePagesRemain(page + 1)
        } else {
            PageSignal::NoMorePages
        };

        Ok(VacancyPage {
            vacancies: raw.items.into_iter().map(Vacancy::from).collect(),
            total_found: raw.found,
            signal,
        })
    }
}
