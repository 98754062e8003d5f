use serde::{Deserialize, Serialize};

/// Header row written at the top of every output sheet
pub const HEADER: [&str; 3] = [
    "URL",
    "Internal Links (Comma Separated)",
    "Anchor Texts (Comma Separated)",
];

/// Separator used when joining links and anchor texts into one cell
pub const CELL_SEPARATOR: &str = ", ";

/// A single hyperlink found inside a page's content container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Value of the `href` attribute, `None` when the attribute is missing
    pub target: Option<String>,

    /// Visible text of the anchor with surrounding whitespace trimmed
    pub anchor_text: String,
}

impl LinkRecord {
    pub fn new(target: Option<String>, anchor_text: String) -> Self {
        Self {
            target,
            anchor_text,
        }
    }
}

/// One output row per processed source URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// URL copied from the input sheet
    pub source_url: String,

    /// Link targets in document order
    pub links: Vec<Option<String>>,

    /// Anchor texts, same order as `links`
    pub anchor_texts: Vec<String>,
}

impl ResultRow {
    /// Build a row from the records extracted for `source_url`
    pub fn new(source_url: String, records: Vec<LinkRecord>) -> Self {
        let (links, anchor_texts) = records
            .into_iter()
            .map(|record| (record.target, record.anchor_text))
            .unzip();

        Self {
            source_url,
            links,
            anchor_texts,
        }
    }

    /// Row for a URL whose extraction failed or found nothing
    pub fn empty(source_url: String) -> Self {
        Self::new(source_url, Vec::new())
    }

    pub fn has_links(&self) -> bool {
        !self.links.is_empty()
    }

    /// Joined link targets; a missing `href` becomes an empty segment
    pub fn links_cell(&self) -> String {
        self.links
            .iter()
            .map(|link| link.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(CELL_SEPARATOR)
    }

    pub fn anchor_texts_cell(&self) -> String {
        self.anchor_texts.join(CELL_SEPARATOR)
    }

    /// The three cells of this row as written to the output sheet
    pub fn cells(&self) -> [String; 3] {
        [
            self.source_url.clone(),
            self.links_cell(),
            self.anchor_texts_cell(),
        ]
    }
}

/// Ordered output rows, accumulated in memory and written once
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> [&'static str; 3] {
        HEADER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(target: Option<&str>, text: &str) -> LinkRecord {
        LinkRecord::new(target.map(str::to_string), text.to_string())
    }

    #[test]
    fn test_cells_preserve_order() {
        let row = ResultRow::new(
            "https://example.com/post".to_string(),
            vec![
                record(Some("/a"), "A"),
                record(Some("/b"), "B"),
                record(Some("/c"), "C"),
            ],
        );

        assert_eq!(row.links_cell(), "/a, /b, /c");
        assert_eq!(row.anchor_texts_cell(), "A, B, C");
        assert!(row.has_links());
    }

    #[test]
    fn test_missing_and_empty_href_collapse_in_cell() {
        let row = ResultRow::new(
            "https://example.com".to_string(),
            vec![
                record(None, "no href"),
                record(Some(""), "empty href"),
                record(Some("/x"), ""),
            ],
        );

        assert_eq!(row.links, vec![None, Some(String::new()), Some("/x".to_string())]);
        assert_eq!(row.links_cell(), ", , /x");
        assert_eq!(row.anchor_texts_cell(), "no href, empty href, ");
    }

    #[test]
    fn test_empty_row() {
        let row = ResultRow::empty("https://example.com".to_string());
        assert!(!row.has_links());
        assert_eq!(
            row.cells(),
            ["https://example.com".to_string(), String::new(), String::new()]
        );
    }

    #[test]
    fn test_table_keeps_insertion_order() {
        let mut table = ResultTable::new();
        assert!(table.is_empty());

        table.push(ResultRow::empty("https://a.example".to_string()));
        table.push(ResultRow::empty("https://b.example".to_string()));

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].source_url, "https://a.example");
        assert_eq!(table.rows()[1].source_url, "https://b.example");
        assert_eq!(table.header()[0], "URL");
    }
}
