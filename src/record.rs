//! Island record data model

use serde::{Deserialize, Serialize};

/// An anchor's trimmed text together with its link target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// One island as listed on the yoweb island info page
///
/// Field order is the JSON key order of the output file. The governor and
/// flag pairs are either both set or both null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IslandRecord {
    pub name: String,
    pub population: Option<u64>,
    pub governor: Option<String>,
    pub governor_link: Option<String>,
    pub property_tax: Option<String>,
    pub flag: Option<String>,
    pub flag_link: Option<String>,
}

impl IslandRecord {
    /// Builds a record, splitting each link into its text/href pair
    pub fn new(
        name: impl Into<String>,
        population: Option<u64>,
        governor: Option<Link>,
        property_tax: Option<String>,
        flag: Option<Link>,
    ) -> Self {
        let (governor, governor_link) = split_link(governor);
        let (flag, flag_link) = split_link(flag);

        Self {
            name: name.into(),
            population,
            governor,
            governor_link,
            property_tax,
            flag,
            flag_link,
        }
    }

    /// Returns the governor as a link, if both halves are present
    pub fn governor(&self) -> Option<Link> {
        join_link(&self.governor, &self.governor_link)
    }

    /// Returns the flag as a link, if both halves are present
    pub fn flag(&self) -> Option<Link> {
        join_link(&self.flag, &self.flag_link)
    }
}

fn split_link(link: Option<Link>) -> (Option<String>, Option<String>) {
    match link {
        Some(Link { text, href }) => (Some(text), Some(href)),
        None => (None, None),
    }
}

fn join_link(text: &Option<String>, href: &Option<String>) -> Option<Link> {
    match (text, href) {
        (Some(text), Some(href)) => Some(Link::new(text.as_str(), href.as_str())),
        _ => None,
    }
}
