use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Broad classification of a per-row extraction failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Non-200 status, transport error or timeout
    Fetch,
    /// Response body could not be read or decoded
    Parse,
    /// The page has no content container
    StructureMiss,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Fetch => "fetch failure",
            FailureKind::Parse => "parse failure",
            FailureKind::StructureMiss => "structure miss",
        };
        f.write_str(name)
    }
}

/// Failure while extracting links from a single URL.
///
/// These never abort a batch: the driver logs them and records an empty row.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to retrieve {url}: status code {status}")]
    Status { url: String, status: u16 },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("failed to read response body from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("no element matching `{selector}` found")]
    StructureMiss { selector: String },
}

impl ExtractError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ExtractError::Status { .. } | ExtractError::Fetch { .. } => FailureKind::Fetch,
            ExtractError::Parse { .. } => FailureKind::Parse,
            ExtractError::StructureMiss { .. } => FailureKind::StructureMiss,
        }
    }
}

/// Fatal errors that stop a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("failed to load configuration from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("failed to open input workbook {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet {sheet} not found in {path}")]
    Sheet { path: PathBuf, sheet: String },

    #[error("invalid output sheet title `{title}`: {source}")]
    SheetTitle {
        title: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("failed to write output workbook {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
