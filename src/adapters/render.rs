use crate::domain::model::StatsReport;
use crate::utils::error::{Result, StatsError};
use comfy_table::{presets::ASCII_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Table => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

pub const TABLE_HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

pub fn render(report: &StatsReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Csv => render_csv(report),
    }
}

pub fn render_table(report: &StatsReport) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(TABLE_HEADER.to_vec());

    for (language, stats) in &report.languages {
        let mut row = Row::new();
        row.add_cell(Cell::new(language).set_alignment(CellAlignment::Left));
        row.add_cell(Cell::new(stats.vacancies_found).set_alignment(CellAlignment::Right));
        row.add_cell(Cell::new(stats.vacancies_processed).set_alignment(CellAlignment::Right));
        row.add_cell(Cell::new(stats.average_salary).set_alignment(CellAlignment::Right));
        table.add_row(row);
    }

    let mut output = format!("{}\n{}", report.title, table);
    if !report.skipped.is_empty() {
        let skipped: Vec<String> = report
            .skipped
            .iter()
            .map(|s| format!("{} ({})", s.language, s.found))
            .collect();
        output.push_str(&format!("\nBelow threshold: {}", skipped.join(", ")));
    }
    output
}

#[derive(Serialize)]
struct CsvRow<'a> {
    language: &'a str,
    vacancies_found: u64,
    vacancies_processed: u64,
    average_salary: u64,
}

fn render_csv(report: &StatsReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (language, stats) in &report.languages {
        writer.serialize(CsvRow {
            language,
            vacancies_found: stats.vacancies_found,
            vacancies_processed: stats.vacancies_processed,
            average_salary: stats.average_salary,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StatsError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| StatsError::ResponseError {
        source_name: report.title.clone(),
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
