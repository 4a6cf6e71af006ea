//! Summary document construction.
//!
//! Produces the tree:
//!
//! ```text
//! html
//! ├── head
//! │   ├── <meta ... />
//! │   ├── title ── "Report: {title}"
//! │   └── style
//! └── body
//!     └── table
//!         └── tr × 8 ── th (label), td (value)
//! ```

use wikisum_markup::{Node, render};

use crate::record::Record;
use crate::sanitize::sanitize;

/// Prefix of the document `<title>`.
pub const TITLE_PREFIX: &str = "Report: ";

const META: &str = r#"<meta content="text/html; charset=utf-8" http-equiv="content-type" />"#;

const STYLE: &str = "table, td, th, tr { border: 1px solid black }";

/// Row labels in output order.
pub const LABELS: [&str; 8] = [
    "Title",
    "URL",
    "Page ID",
    "Parent ID",
    "Revision ID",
    "Content",
    "Sections",
    "Summary",
];

/// Field values in the order of [`LABELS`].
fn values(record: &Record) -> [&str; 8] {
    [
        record.title.as_str(),
        record.url.as_str(),
        record.page_id.as_str(),
        record.parent_id.as_str(),
        record.revision_id.as_str(),
        record.content.as_str(),
        record.sections.as_str(),
        record.summary.as_str(),
    ]
}

/// Build the summary tree for a record.
///
/// Each record field is escaped exactly once before it becomes a leaf.
/// Labels, the style rule and the meta tag are literals and are never
/// escaped.
#[must_use]
pub fn build(record: &Record) -> Node {
    let title = format!("{TITLE_PREFIX}{}", sanitize(&record.title));

    let head = Node::element(
        "head",
        vec![
            Node::trusted(META),
            Node::wrap("title", Node::escaped(title)),
            Node::wrap("style", Node::trusted(STYLE)),
        ],
    );

    let rows = LABELS
        .into_iter()
        .zip(values(record))
        .map(|(label, value)| row(label, value))
        .collect();
    let body = Node::wrap("body", Node::element("table", rows));

    Node::element("html", vec![head, body])
}

/// Build and serialize the summary of a record.
#[must_use]
pub fn summarize(record: &Record) -> String {
    render(&build(record))
}

fn row(label: &'static str, value: &str) -> Node {
    Node::element(
        "tr",
        vec![
            Node::wrap("th", Node::trusted(label)),
            Node::wrap("td", Node::escaped(sanitize(value))),
        ],
    )
}
