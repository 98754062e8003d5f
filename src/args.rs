use article_links::{LinkBatch, SheetSelector};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "article-links")]
#[command(about = "Extracts the links in each article listed in a spreadsheet")]
#[command(version)]
pub struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input workbook with URLs in the first column
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output workbook (overwritten)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input sheet, by zero-based index or by name
    #[arg(short, long)]
    pub sheet: Option<SheetSelector>,

    /// Selector for the content container
    #[arg(long)]
    pub content: Option<String>,

    /// Selector for a region whose links are ignored (repeatable)
    #[arg(short, long = "exclude")]
    pub exclude: Vec<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

impl Args {
    /// Build the batch from an optional config file plus flag overrides
    pub fn into_batch(self) -> Result<LinkBatch, article_links::BatchError> {
        let mut batch = LinkBatch::default();
        if let Some(path) = &self.config {
            batch = batch.with_config_file(path)?;
        }
        if let Some(input) = self.input {
            batch = batch.with_input(input);
        }
        if let Some(output) = self.output {
            batch = batch.with_output(output);
        }
        if let Some(sheet) = self.sheet {
            batch = batch.with_sheet(sheet);
        }
        if let Some(content) = self.content {
            batch = batch.with_content_selector(content);
        }
        if !self.exclude.is_empty() {
            batch = batch.with_exclusion_selectors(self.exclude);
        }
        if let Some(timeout) = self.timeout {
            batch = batch.with_request_timeout(timeout);
        }
        Ok(batch)
    }
}
