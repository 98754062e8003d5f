use crate::error::BatchError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which worksheet of the input workbook holds the URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SheetSelector {
    /// Zero-based position in the workbook
    Index(usize),
    /// Sheet name as shown in the workbook
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

impl FromStr for SheetSelector {
    type Err = Infallible;

    /// Numbers select by position, anything else by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<usize>() {
            Ok(index) => SheetSelector::Index(index),
            Err(_) => SheetSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for SheetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetSelector::Index(index) => write!(f, "#{}", index),
            SheetSelector::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Options controlling where links are looked up in a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// CSS selector for the content container; the first match is used
    #[serde(default = "default_content_selector")]
    pub content_selector: String,

    /// CSS selectors for regions inside the container whose links are ignored
    #[serde(default = "default_exclusion_selectors")]
    pub exclusion_selectors: Vec<String>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            content_selector: default_content_selector(),
            exclusion_selectors: default_exclusion_selectors(),
            request_timeout_secs: None,
        }
    }
}

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Workbook with source URLs in the first column, header in row 1
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Workbook to create; an existing file is overwritten
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Input worksheet to read
    #[serde(default)]
    pub sheet: SheetSelector,

    /// Title of the single output worksheet
    #[serde(default = "default_output_sheet_title")]
    pub output_sheet_title: String,

    #[serde(flatten)]
    pub extract: ExtractOptions,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            sheet: SheetSelector::default(),
            output_sheet_title: default_output_sheet_title(),
            extract: ExtractOptions::default(),
        }
    }
}

impl BatchConfig {
    /// Create a configuration with default values for the given paths
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BatchError> {
        let path = path.as_ref();
        let config_error = |reason: String| BatchError::Config {
            path: path.to_path_buf(),
            reason,
        };

        let mut file = File::open(path).map_err(|e| config_error(e.to_string()))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| config_error(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| config_error(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("article_urls.xlsx")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("scraped_article_links.xlsx")
}

fn default_output_sheet_title() -> String {
    "Scraped Links".to_string()
}

fn default_content_selector() -> String {
    "article".to_string()
}

/// The "related posts" block of the MH WordPress themes
fn default_exclusion_selectors() -> Vec<String> {
    vec!["div#mh-related-posts".to_string()]
}
