use crate::config::ExtractOptions;
use crate::error::{BatchError, ExtractError};
use crate::results::LinkRecord;
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors used to locate links inside a page
#[derive(Debug, Clone)]
pub struct ContentSelectors {
    content_source: String,
    content: Selector,
    exclusions: Vec<Selector>,
    anchor: Selector,
}

impl ContentSelectors {
    /// Compile the selectors named in `options`
    pub fn new(options: &ExtractOptions) -> Result<Self, BatchError> {
        let exclusions = options
            .exclusion_selectors
            .iter()
            .map(|s| compile(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            content_source: options.content_selector.clone(),
            content: compile(&options.content_selector)?,
            exclusions,
            anchor: compile("a")?,
        })
    }

    /// True if `element`, or any ancestor below `container`, is an excluded region
    fn is_excluded(&self, element: ElementRef<'_>, container: ElementRef<'_>) -> bool {
        if self.exclusions.is_empty() {
            return false;
        }

        std::iter::once(element)
            .chain(
                element
                    .ancestors()
                    .take_while(|node| node.id() != container.id())
                    .filter_map(ElementRef::wrap),
            )
            .any(|el| self.exclusions.iter().any(|sel| sel.matches(&el)))
    }
}

fn compile(selector: &str) -> Result<Selector, BatchError> {
    Selector::parse(selector).map_err(|e| BatchError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Extracts the links found in the content container of an HTML document.
///
/// Markup is parsed leniently, so only a missing container is an error.
/// Anchors inside excluded regions are skipped along with everything else
/// in those regions; the remaining anchors are returned in document order.
pub fn extract_links(
    html: &str,
    selectors: &ContentSelectors,
) -> Result<Vec<LinkRecord>, ExtractError> {
    let doc = Html::parse_document(html);

    let container = doc
        .select(&selectors.content)
        .next()
        .ok_or_else(|| ExtractError::StructureMiss {
            selector: selectors.content_source.clone(),
        })?;

    let links = container
        .select(&selectors.anchor)
        .filter(|anchor| !selectors.is_excluded(*anchor, container))
        .map(|anchor| {
            let target = anchor.value().attr("href").map(|s| s.to_string());
            let text = anchor.text().collect::<String>();
            LinkRecord::new(target, text.trim().to_string())
        })
        .collect::<Vec<_>>();

    ::log::debug!("HTML parser found {} links in content container", links.len());

    Ok(links)
}
