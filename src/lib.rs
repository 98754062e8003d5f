// Re-export modules
pub mod config;
pub mod driver;
pub mod error;
pub mod extractor;
pub mod parsers;
pub mod results;
pub mod sheets;

// Re-export commonly used types for convenience
pub use config::{BatchConfig, ExtractOptions, SheetSelector};
pub use driver::BatchSummary;
pub use error::{BatchError, ExtractError, FailureKind};
pub use extractor::Extractor;
pub use results::{LinkRecord, ResultRow, ResultTable};

use std::path::{Path, PathBuf};

/// Builder for a link extraction batch run
#[derive(Debug, Clone, Default)]
pub struct LinkBatch {
    config: BatchConfig,
}

impl LinkBatch {
    /// Create a batch reading `input` and writing `output`, all other settings default
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            config: BatchConfig::new(input, output),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Result<Self, BatchError> {
        self.config = BatchConfig::from_file(path)?;
        Ok(self)
    }

    /// Set the input workbook path
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Set the output workbook path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Choose the input worksheet
    pub fn with_sheet(mut self, sheet: SheetSelector) -> Self {
        self.config.sheet = sheet;
        self
    }

    /// Set the selector for the content container
    pub fn with_content_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.extract.content_selector = selector.into();
        self
    }

    /// Replace the exclusion region selectors
    pub fn with_exclusion_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extract.exclusion_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Set a per-request timeout in seconds
    pub fn with_request_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.extract.request_timeout_secs = Some(timeout_seconds);
        self
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run the batch to completion
    pub async fn run(self) -> Result<BatchSummary, BatchError> {
        driver::run(&self.config).await
    }
}
