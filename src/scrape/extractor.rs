//! Island extraction from the yoweb island info page
//!
//! Page layout, as served by yoweb:
//!
//! ```text
//! <body>
//!   <center>                          container
//!     <center>header</center>         no marker, skipped
//!     <center>                        island block
//!       <font size="+1">Name</font>   marker
//!       Population: 1,024<br>
//!       Governor: <a href="/yoweb/pirate.wm?...">Jack</a><br>
//!       Property tax: 5%<br>
//!     </center>
//!     <a href="/yoweb/flag.wm?...">Flag</a>
//!     ...
//! ```

use crate::record::{IslandRecord, Link};
use crate::scrape::parser::{element_text, labelled_value, labelled_values, parse_document};
use crate::{IslandError, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const CONTAINER_SELECTOR: &str = "body > center";
const MARKER_SELECTOR: &str = r#"font[size="+1"]"#;
const ANCHOR_SELECTOR: &str = "a[href]";
const GOVERNOR_HREF_PATTERN: &str = r"/yoweb/pirate\.wm";
const POPULATION_PATTERN: &str = r"^([\d,]+)";

const POPULATION_LABEL: &str = "Population:";
const PROPERTY_TAX_LABEL: &str = "Property tax:";

/// Extracts island records from a parsed island info page
///
/// Selectors and patterns are compiled once in [`IslandExtractor::new`].
#[derive(Debug, Clone)]
pub struct IslandExtractor {
    container: Selector,
    marker: Selector,
    anchor: Selector,
    governor_href: Regex,
    population: Regex,
}

impl IslandExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            container: compile_selector(CONTAINER_SELECTOR)?,
            marker: compile_selector(MARKER_SELECTOR)?,
            anchor: compile_selector(ANCHOR_SELECTOR)?,
            governor_href: Regex::new(GOVERNOR_HREF_PATTERN)?,
            population: Regex::new(POPULATION_PATTERN)?,
        })
    }

    /// Parses `html` and extracts its islands
    pub fn extract_html(&self, html: &str) -> Result<Vec<IslandRecord>> {
        let document = parse_document(html);
        self.extract(&document)
    }

    /// Extracts one record per marked island block, in document order
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<IslandRecord>)` - Possibly empty list of islands
    /// * `Err(IslandError::ContainerNotFound)` - No `body > center` element
    pub fn extract(&self, document: &Html) -> Result<Vec<IslandRecord>> {
        let container = document
            .select(&self.container)
            .next()
            .ok_or(IslandError::ContainerNotFound)?;

        let mut islands = Vec::new();

        for block in container
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "center")
        {
            if let Some(island) = self.extract_block(block) {
                tracing::debug!("Extracted island {:?}", island.name);
                islands.push(island);
            }
        }

        Ok(islands)
    }

    /// Builds a record from one block, or `None` if it is not an island
    fn extract_block(&self, block: ElementRef<'_>) -> Option<IslandRecord> {
        let marker = block.select(&self.marker).next()?;

        let name = element_text(marker);
        if name.is_empty() {
            tracing::warn!("Skipping island block with an empty name");
            return None;
        }

        // First occurrence that starts with digits wins
        let population = labelled_values(block, POPULATION_LABEL)
            .into_iter()
            .find(|value| self.population.is_match(value))
            .and_then(|value| self.parse_population(&name, value));
        let governor = self.governor(block);
        let property_tax = labelled_value(block, PROPERTY_TAX_LABEL);
        let flag = flag_anchor(block);

        Some(IslandRecord::new(
            name,
            population,
            governor,
            property_tax,
            flag,
        ))
    }

    /// Parses a comma-grouped population such as `12,345`
    ///
    /// Digits that do not form a valid number (a lone comma, overflow) are
    /// logged and treated as unknown.
    pub fn parse_population(&self, island: &str, value: &str) -> Option<u64> {
        let digits = self.population.captures(value)?.get(1)?.as_str();
        let stripped = digits.replace(',', "");

        match stripped.parse::<u64>() {
            Ok(population) => Some(population),
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed population {:?} for {}: {}",
                    digits,
                    island,
                    e
                );
                None
            }
        }
    }

    /// First anchor inside the block that links to a pirate profile
    fn governor(&self, block: ElementRef<'_>) -> Option<Link> {
        block.select(&self.anchor).find_map(|anchor| {
            let href = anchor.value().attr("href")?;
            self.governor_href
                .is_match(href)
                .then(|| Link::new(element_text(anchor), href))
        })
    }
}

/// The anchor right after the block in its parent, if that element is one
///
/// Whitespace and comments between the block and the anchor are allowed.
/// Any other text or element in between means the block has no flag, so an
/// island without a flag never picks up the next island's anchor.
fn flag_anchor(block: ElementRef<'_>) -> Option<Link> {
    for node in block.next_siblings() {
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() != "a" {
                return None;
            }
            let href = element.value().attr("href")?;
            return Some(Link::new(element_text(element), href));
        }

        if let Some(text) = node.value().as_text() {
            if !text.trim().is_empty() {
                return None;
            }
        }
    }

    None
}

fn compile_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| IslandError::Selector(format!("{}: {:?}", css, e)))
}
