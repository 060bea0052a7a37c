use crate::error::ReportError;
use crate::labels::{labels, Labels};
use crate::section::{build_section, Block, Section};
use crate::tasks::{tasks_for, Task, TaskKind};
use analytics::StoreReport;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use configuration::{Locale, OutputFormat, Profile, ReportSettings};
use serde_json::{json, Map, Value};
use std::fmt::Write;

const SEPARATOR: &str = "------------------------------";

/// Formats a `StoreReport` for display.
///
/// The reporter never computes anything: it picks the tasks of its profile, looks up the
/// labels of its locale and lays the precomputed values out in the chosen format.
#[derive(Debug, Clone)]
pub struct Reporter {
    settings: ReportSettings,
}

impl Reporter {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn labels(&self) -> &'static Labels {
        labels(self.settings.locale)
    }

    pub fn tasks(&self) -> &'static [Task] {
        tasks_for(self.settings.profile)
    }

    pub fn render(&self, report: &StoreReport<'_>) -> Result<String, ReportError> {
        tracing::debug!(
            profile = ?self.settings.profile,
            locale = ?self.settings.locale,
            format = ?self.settings.format,
            tasks = self.tasks().len(),
            "Rendering report."
        );
        match self.settings.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Table => self.render_tables(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    fn sections(&self, report: &StoreReport<'_>) -> Vec<Section> {
        let labels = self.labels();
        self.tasks()
            .iter()
            .map(|task| build_section(*task, report, labels))
            .collect()
    }

    fn render_text(&self, report: &StoreReport<'_>) -> Result<String, ReportError> {
        let labels = self.labels();
        let mut out = String::new();

        for (index, section) in self.sections(report).iter().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{} {}: {}", labels.task, section.number, section.title)?;
            for block in &section.blocks {
                match block {
                    Block::Line(text) => writeln!(out, "{text}")?,
                    Block::Rows { header, rows } => {
                        for row in rows {
                            let fields: Vec<String> = header
                                .iter()
                                .zip(row)
                                .map(|(name, value)| format!("{name}: {value}"))
                                .collect();
                            writeln!(out, "   {}", fields.join(", "))?;
                        }
                    }
                }
            }
            writeln!(out, "{SEPARATOR}")?;
        }

        Ok(out)
    }

    fn render_tables(&self, report: &StoreReport<'_>) -> Result<String, ReportError> {
        let labels = self.labels();
        let mut out = String::new();

        for section in self.sections(report) {
            writeln!(out, "{} {}: {}", labels.task, section.number, section.title)?;
            for block in &section.blocks {
                match block {
                    Block::Line(text) => writeln!(out, "{text}")?,
                    Block::Rows { header, rows } => writeln!(out, "{}", build_table(header, rows))?,
                }
            }
            writeln!(out)?;
        }

        Ok(out)
    }

    fn render_json(&self, report: &StoreReport<'_>) -> Result<String, ReportError> {
        let labels = self.labels();
        let mut tasks = Map::new();

        for task in self.tasks() {
            let value = json!({
                "title": task.kind.title(labels),
                "result": task_value(task.kind, report)?,
            });
            tasks.insert(task.number.to_string(), value);
        }

        let document = json!({
            "profile": profile_code(self.settings.profile),
            "locale": locale_code(self.settings.locale),
            "tasks": Value::Object(tasks),
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

fn build_table(header: &[String], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().map(|name| Cell::new(name).fg(Color::White)));
    for row in rows {
        table.add_row(row.iter().map(Cell::new));
    }
    table
}

fn task_value(kind: TaskKind, report: &StoreReport<'_>) -> Result<Value, ReportError> {
    let value = match kind {
        TaskKind::CustomerDetails => json!({
            "customers": report.customers,
            "totals": report.customer_totals,
        }),
        TaskKind::TopSpender => serde_json::to_value(report.top_spender)?,
        TaskKind::MostExpensiveProduct => serde_json::to_value(report.most_expensive_product)?,
        TaskKind::AverageProductPrice => serde_json::to_value(report.average_product_price)?,
        TaskKind::LineItemAverage => serde_json::to_value(report.line_item_average)?,
        TaskKind::LowestSpender => serde_json::to_value(report.lowest_spender)?,
        TaskKind::BestSellingCategory => serde_json::to_value(report.best_selling_category)?,
        TaskKind::SoldExtremes => serde_json::to_value(report.sold_extremes)?,
        TaskKind::TopLineItemCustomer => serde_json::to_value(report.top_line_item_customer)?,
        TaskKind::MostSoldProduct => serde_json::to_value(report.most_sold_product)?,
        TaskKind::AverageSpending => serde_json::to_value(report.average_spending)?,
        TaskKind::MostProfitableCategory => serde_json::to_value(report.most_profitable_category)?,
        TaskKind::MostExpensivePurchases => serde_json::to_value(&report.most_expensive_purchases)?,
        TaskKind::MostExpensiveCategories => {
            serde_json::to_value(&report.most_expensive_categories)?
        }
        TaskKind::SoldQuantities => serde_json::to_value(&report.sold_quantities)?,
    };
    Ok(value)
}

fn profile_code(profile: Profile) -> &'static str {
    match profile {
        Profile::Full => "full",
        Profile::MainPage => "main-page",
    }
}

fn locale_code(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "en",
        Locale::Tr => "tr",
    }
}
