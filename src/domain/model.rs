use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 單一職缺，來源的原始格式在抓取時就轉成這個結構
#[derive(Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub id: String,
    pub title: String,
    pub salary: Option<SalaryRange>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalaryRange {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn new(from: Option<f64>, to: Option<f64>, currency: Option<&str>) -> Self {
        Self {
            from,
            to,
            currency: currency.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryEstimate {
    Known(u64),
    Unknown,
}

impl SalaryEstimate {
    pub fn value(self) -> Option<u64> {
        match self {
            SalaryEstimate::Known(value) => Some(value),
            SalaryEstimate::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

/// Result of looking up one language on one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageOutcome {
    BelowThreshold { found: u64 },
    Tracked(LanguageStats),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLanguage {
    pub language: String,
    pub found: u64,
}

/// Where the next page lives, as reported by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSignal {
    MorePagesRemain(u32),
    NoMorePages,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VacancyPage {
    pub vacancies: Vec<Vacancy>,
    pub total_found: u64,
    pub signal: PageSignal,
}

/// Per-language statistics for one source, kept in configured language order.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_ordered")]
    pub languages: Vec<(String, LanguageStats)>,
    pub skipped: Vec<SkippedLanguage>,
}

impl StatsReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            languages: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn record(&mut self, language: &str, outcome: LanguageOutcome) {
        match outcome {
            LanguageOutcome::Tracked(stats) => self.languages.push((language.to_string(), stats)),
            LanguageOutcome::BelowThreshold { found } => self.skipped.push(SkippedLanguage {
                language: language.to_string(),
                found,
            }),
        }
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.languages
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stats)| stats)
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

// serde_json 預設的 Map 會重新排序，這裡手動保留語言順序
fn serialize_ordered<S: Serializer>(
    entries: &[(String, LanguageStats)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (language, stats) in entries {
        map.serialize_entry(language, stats)?;
    }
    map.end()
}
