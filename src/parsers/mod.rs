pub mod html;


pub use html::{ContentSelectors, extract_links};
