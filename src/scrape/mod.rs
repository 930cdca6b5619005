//! Scrape module for the yoweb island listing
//!
//! This module contains the whole pipeline:
//! - HTTP fetching of the island info page
//! - HTML parsing and text lookup helpers
//! - Island record extraction
//! - The run itself (fetch, extract, write)

mod extractor;
mod fetcher;
mod parser;
mod pipeline;

pub use extractor::IslandExtractor;
pub use fetcher::{build_http_client, fetch_page, island_info_url, ISLAND_INFO_PATH};
pub use parser::{element_text, labelled_value, labelled_values, parse_document};
pub use pipeline::{fetch_islands, read_islands, run};
