use crate::config::ExtractOptions;
use crate::error::{BatchError, ExtractError};
use crate::parsers::{ContentSelectors, extract_links};
use crate::results::LinkRecord;
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// Fetches pages and extracts the links in their content container
#[derive(Debug, Clone)]
pub struct Extractor {
    client: Client,
    selectors: ContentSelectors,
}

impl Extractor {
    /// Build an extractor, compiling selectors and the HTTP client up front
    pub fn new(options: &ExtractOptions) -> Result<Self, BatchError> {
        let selectors = ContentSelectors::new(options)?;

        let mut builder = Client::builder();
        if let Some(secs) = options.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            selectors,
        })
    }

    /// Fetch `url` with a single GET and return its links in document order.
    ///
    /// Anything other than a 200 response is an error; there are no retries.
    pub async fn extract(&self, url: &str) -> Result<Vec<LinkRecord>, ExtractError> {
        let html = self.fetch(url).await?;
        let links = extract_links(&html, &self.selectors)?;

        ::log::debug!("Extracted {} links from {}", links.len(), url);
        Ok(links)
    }

    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let parsed = Url::parse(url).map_err(|e| ExtractError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        ::log::debug!("Fetching {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| ExtractError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ExtractError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| ExtractError::Parse {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(decode_body(&body, content_type.as_deref()))
    }
}

/// How far into the body to look for a `<meta>` charset declaration
const META_SNIFF_BYTES: usize = 1024;

/// Decode a response body to text.
///
/// A byte order mark wins, then the `Content-Type` charset, then a `<meta>`
/// declaration near the start of the document; UTF-8 otherwise.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| sniff_meta_charset(body))
        .unwrap_or(UTF_8);

    let (text, _, had_errors) = encoding.decode(body);
    if had_errors {
        ::log::debug!("Body contained invalid {} sequences", encoding.name());
    }
    text.into_owned()
}

/// Value following `charset=` up to the next delimiter
fn charset_label(text: &str) -> Option<String> {
    let lower = text.to_ascii_lowercase();
    let start = lower.find("charset=")? + "charset=".len();
    let label = lower[start..]
        .trim_start_matches(['"', '\'', ' '])
        .split(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | ';' | '>' | '/'))
        .next()?;

    (!label.is_empty()).then(|| label.to_string())
}

fn sniff_meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_SNIFF_BYTES)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    head.match_indices("<meta")
        .filter_map(|(start, _)| {
            let tag = &head[start..];
            let tag = &tag[..tag.find('>').unwrap_or(tag.len())];
            charset_label(tag)
        })
        .find_map(|label| Encoding::for_label(label.as_bytes()))
}
