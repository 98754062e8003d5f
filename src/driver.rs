use crate::config::BatchConfig;
use crate::error::{BatchError, ExtractError, FailureKind};
use crate::extractor::Extractor;
use crate::results::{ResultRow, ResultTable};
use crate::sheets;

/// Counts collected over one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Output rows written, header excluded
    pub rows: usize,
    /// Rows that ended up with at least one link
    pub rows_with_links: usize,
    pub fetch_failures: usize,
    pub parse_failures: usize,
    pub structure_misses: usize,
}

impl BatchSummary {
    fn record(&mut self, row: &ResultRow) {
        self.rows += 1;
        if row.has_links() {
            self.rows_with_links += 1;
        }
    }

    fn record_failure(&mut self, kind: FailureKind) {
        match kind {
            FailureKind::Fetch => self.fetch_failures += 1,
            FailureKind::Parse => self.parse_failures += 1,
            FailureKind::StructureMiss => self.structure_misses += 1,
        }
    }

    pub fn failures(&self) -> usize {
        self.fetch_failures + self.parse_failures + self.structure_misses
    }
}

/// Run a batch: read URLs, extract links from each page in order, write the result table.
///
/// Per-URL failures are logged and produce an empty row. Only setup errors
/// (selectors, HTTP client, output sheet title, input workbook) and the final
/// write are fatal.
pub async fn run(config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    let extractor = Extractor::new(&config.extract)?;
    sheets::validate_title(&config.output_sheet_title)?;
    let urls = sheets::read_urls(&config.input_path, &config.sheet)?;

    let mut table = ResultTable::new();
    let mut summary = BatchSummary::default();

    for (index, url) in urls.into_iter().enumerate() {
        ::log::info!("Processing URL {}: {}", index + 1, url);

        let row = match extractor.extract(url.trim()).await {
            Ok(links) => ResultRow::new(url, links),
            Err(e) => {
                log_failure(&url, &e);
                summary.record_failure(e.kind());
                ResultRow::empty(url)
            }
        };

        summary.record(&row);
        table.push(row);
    }

    sheets::write_table(&config.output_path, &table, &config.output_sheet_title)?;
    ::log::info!(
        "Scraping completed. Data saved to {}",
        config.output_path.display()
    );

    Ok(summary)
}

fn log_failure(url: &str, error: &ExtractError) {
    match error {
        ExtractError::StructureMiss { .. } => {
            ::log::warn!("Skipping {} ({}): {}", url, error.kind(), error)
        }
        _ => ::log::error!("Skipping {} ({}): {}", url, error.kind(), error),
    }
}
