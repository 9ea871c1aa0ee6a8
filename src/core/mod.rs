pub mod aggregate;
pub mod etl;
pub mod fetcher;
pub mod report;
pub mod salary;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::model::{
    LanguageOutcome, LanguageStats, SalaryEstimate, SalaryRange, StatsReport, Vacancy,
};
pub use crate::domain::ports::{ConfigProvider, Storage, VacancySource};
pub use crate::utils::error::Result;
