use crate::config::SelectorConfig;
use crate::error::ImportError;
use crate::model::ResultRow;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// Extracts result rows from a results table using CSS selectors.
///
/// Selectors are compiled once at construction. Extraction itself cannot
/// fail: a row lacking one of the field elements yields an empty string for
/// that field.
#[derive(Debug, Clone)]
pub struct ResultsTableExtractor {
    container: Selector,
    row: Selector,
    horse_name: Selector,
    jockey_name: Selector,
    trainer_name: Selector,
    finishing_position: Selector,
    skip_empty_rows: bool,
}

fn compile(selector: &str) -> Result<Selector, ImportError> {
    Selector::parse(selector)
        .map_err(|e| ImportError::InvalidSelector(format!("'{}': {}", selector, e)))
}

/// Text of every descendant of `row` matching `selector`, joined and trimmed.
fn field_text(row: &ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

impl ResultsTableExtractor {
    pub fn new(config: &SelectorConfig) -> Result<Self, ImportError> {
        Ok(Self {
            container: compile(&config.container)?,
            row: compile(&config.row)?,
            horse_name: compile(&config.horse_name)?,
            jockey_name: compile(&config.jockey_name)?,
            trainer_name: compile(&config.trainer_name)?,
            finishing_position: compile(&config.finishing_position)?,
            skip_empty_rows: config.skip_empty_rows,
        })
    }

    /// A row counts once, however many container matches enclose it
    fn in_container(&self, row: &ElementRef) -> bool {
        row.ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| self.container.matches(&ancestor))
    }

    /// Extract rows from a parsed document, in document order
    pub fn extract(&self, document: &Html) -> Vec<ResultRow> {
        let mut rows = Vec::new();
        let mut skipped = 0;

        for element in document
            .select(&self.row)
            .filter(|row| self.in_container(row))
        {
            let row = ResultRow {
                horse_name: field_text(&element, &self.horse_name),
                jockey_name: field_text(&element, &self.jockey_name),
                trainer_name: field_text(&element, &self.trainer_name),
                finishing_position: field_text(&element, &self.finishing_position),
            };

            if self.skip_empty_rows && row.is_empty() {
                skipped += 1;
                continue;
            }
            rows.push(row);
        }

        debug!("Extracted {} result rows ({} empty rows skipped)", rows.len(), skipped);
        rows
    }

    /// Parse raw HTML and extract rows
    pub fn extract_html(&self, html: &str) -> Vec<ResultRow> {
        self.extract(&Html::parse_document(html))
    }
}

impl Default for ResultsTableExtractor {
    fn default() -> Self {
        // The built-in selector set is static and always valid
        Self::new(&SelectorConfig::default()).expect("default selectors are valid")
    }
}
