use crate::domain::model::{PageSignal, SalaryRange, Vacancy, VacancyPage};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// In-memory source answering from a fixed page script; unscripted pages fail.
pub(crate) struct ScriptedSource {
    name: String,
    pages: HashMap<(String, u32), VacancyPage>,
    delays: HashMap<String, Duration>,
    requests: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self {
            name: "scripted".to_string(),
            pages: HashMap::new(),
            delays: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Every page of `language` answers only after `delay`.
    pub(crate) fn delay(mut self, language: &str, delay: Duration) -> Self {
        self.delays.insert(language.to_string(), delay);
        self
    }

    /// Adds a page of `count` vacancies without salary data.
    pub(crate) fn page(
        self,
        language: &str,
        page: u32,
        total_found: u64,
        count: usize,
        signal: PageSignal,
    ) -> Self {
        let vacancies = (0..count)
            .map(|i| vacancy(&format!("{}-{}-{}", language, page, i), None))
            .collect();
        self.page_with(language, page, total_found, vacancies, signal)
    }

    pub(crate) fn page_with(
        mut self,
        language: &str,
        page: u32,
        total_found: u64,
        vacancies: Vec<Vacancy>,
        signal: PageSignal,
    ) -> Self {
        self.pages.insert(
            (language.to_string(), page),
            VacancyPage {
                vacancies,
                total_found,
                signal,
            },
        );
        self
    }

    pub(crate) fn requested_pages(&self, language: &str) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(lang, _)| lang == language)
            .map(|(_, page)| *page)
            .collect()
    }

    pub(crate) fn request_log(&self) -> Vec<(String, u32)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn requested_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for (language, _) in self.requests.lock().unwrap().iter() {
            if !languages.contains(language) {
                languages.push(language.clone());
            }
        }
        languages
    }
}

#[async_trait]
impl VacancySource for ScriptedSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        "Scripted source"
    }

    fn target_currency(&self) -> &str {
        "RUR"
    }

    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        self.requests
            .lock()
            .unwrap()
            .push((language.to_string(), page));

        if let Some(delay) = self.delays.get(language) {
            tokio::time::sleep(*delay).await;
        }

        self.pages
            .get(&(language.to_string(), page))
            .cloned()
            .ok_or_else(|| StatsError::ResponseError {
                source_name: self.name.clone(),
                message: format!("no page {} for {}", page, language),
            })
    }
}

pub(crate) fn vacancy(id: &str, salary: Option<SalaryRange>) -> Vacancy {
    Vacancy {
        id: id.to_string(),
        title: format!("Developer {}", id),
        salary,
    }
}
