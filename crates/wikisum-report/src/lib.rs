//! Sanitized HTML summaries of article records.
//!
//! [`build`] turns a [`Record`] into a [`wikisum_markup::Node`] tree: a head
//! with metadata, title and inline style, and a body holding one table row
//! per record field. [`summarize`] builds and serializes in one step.
//!
//! Every record field is untrusted and goes through [`sanitize`] before it
//! reaches the tree. Labels and other literals owned by the document are not
//! escaped.
//!
//! # Example
//!
//! ```
//! use wikisum_report::{Record, summarize};
//!
//! let record = Record::new("Kraków", "http://en.wikipedia.org/wiki/Krak%C3%B3w", "16815", "657359058", "658830708")
//!     .with_content("<b>not bold</b>");
//! let html = summarize(&record);
//!
//! assert!(html.contains("<td>Kraków</td>"));
//! assert!(html.contains("&lt;b&gt;not bold&lt;/b&gt;"));
//! ```

mod document;
mod record;
mod sanitize;

pub use document::{LABELS, TITLE_PREFIX, build, summarize};
pub use record::Record;
pub use sanitize::sanitize;
