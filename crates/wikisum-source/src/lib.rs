//! Article record lookup.
//!
//! This crate provides a [`PageSource`] trait for resolving a page
//! identifier taken from a request into a [`wikisum_report::Record`]. Two
//! backends exist:
//!
//! - [`WikipediaSource`]: live lookups against the MediaWiki action API
//! - [`FixtureSource`]: canned records held in memory, for test mode
//!
//! Identifiers made only of ASCII digits are numeric page ids; anything else
//! is treated as a page title (see [`PageId`]). The fixture backend matches
//! page ids only.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use wikisum_source::{PageSource, WikipediaSource};
//!
//! let source = WikipediaSource::new(
//!     "https://en.wikipedia.org/w/api.php",
//!     Duration::from_secs(30),
//! );
//! let record = source.fetch("New_york_city")?;
//! println!("{} ({})", record.title, record.page_id);
//! ```

mod fixture;
mod source;
mod wikipedia;

pub use fixture::FixtureSource;
pub use source::{PageId, PageSource, SourceError, SourceErrorKind};
pub use wikipedia::WikipediaSource;
