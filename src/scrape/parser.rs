//! DOM helpers over `scraper`
//!
//! The island page is old table-free markup where values sit in bare text
//! next to their labels (`Population: 1,024<br>`). These helpers locate
//! such values by walking text nodes instead of pattern-matching serialized
//! markup.

use scraper::{ElementRef, Html};

/// Parses an HTML document
///
/// Parsing is permissive: malformed markup still yields a best-effort tree.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Returns the element's text content with surrounding whitespace removed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Values that follow `label` inside `element`, in document order
///
/// Each value is the rest of the label's own text node up to the end of
/// the line. Markup right after a label ends the value, so
/// `Population: <b>1,024</b>` has no value, the same as a bare
/// `Population:<br>`. Occurrences without a value are left out.
pub fn labelled_values<'a>(element: ElementRef<'a>, label: &str) -> Vec<&'a str> {
    let mut values = Vec::new();

    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let text: &'a str = text;

        for (pos, _) in text.match_indices(label) {
            let value = first_line(&text[pos + label.len()..]);
            if !value.is_empty() {
                values.push(value);
            }
        }
    }

    values
}

/// First value that follows `label` inside `element`
///
/// # Example
///
/// ```
/// use scraper::Selector;
/// use yoweb_islands::scrape::{labelled_value, parse_document};
///
/// let doc = parse_document("<p>Property tax: 5%<br>Population: 10</p>");
/// let p = doc.select(&Selector::parse("p").unwrap()).next().unwrap();
/// assert_eq!(labelled_value(p, "Property tax:"), Some("5%".to_string()));
/// ```
pub fn labelled_value(element: ElementRef<'_>, label: &str) -> Option<String> {
    labelled_values(element, label)
        .into_iter()
        .next()
        .map(str::to_string)
}

/// First non-blank line of `s`, trimmed
fn first_line(s: &str) -> &str {
    s.trim_start().lines().next().unwrap_or("").trim()
}
