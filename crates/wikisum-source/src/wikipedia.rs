//! MediaWiki API client.
//!
//! Provides a sync HTTP client that assembles a [`Record`] from three API
//! requests: page info with revision ids and the plain-text body, the
//! plain-text intro, and the section list.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};
use ureq::Agent;
use wikisum_report::Record;

use crate::source::{PageId, PageSource, SourceError};

/// Sent with every request, as the API etiquette asks.
const USER_AGENT: &str = concat!(
    "wikisum/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/wikisum/wikisum)"
);

/// Joins section headings in [`Record::sections`].
const SECTION_SEPARATOR: &str = ", ";

/// Live source backed by the MediaWiki action API.
pub struct WikipediaSource {
    agent: Agent,
    api_url: String,
}

impl WikipediaSource {
    /// Create a client for the given API endpoint.
    ///
    /// # Arguments
    /// * `api_url` - Full `api.php` URL
    /// * `timeout` - Overall timeout per request
    #[must_use]
    pub fn new(api_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_url: api_url.to_owned(),
        }
    }

    /// Issue a GET request and return the response body.
    fn get(&self, params: &[(&str, &str)]) -> Result<String, SourceError> {
        debug!(url = %self.api_url, ?params, "API request");

        let response = self
            .agent
            .get(&self.api_url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .query("format", "json")
            .query("formatversion", "2")
            .query_pairs(params.iter().copied())
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(SourceError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_to_string()?)
    }
}

impl PageSource for WikipediaSource {
    fn fetch(&self, id: &str) -> Result<Record, SourceError> {
        let page_id = PageId::parse(id)?;
        info!(?page_id, "Fetching page");

        let numeric;
        let selector = match page_id {
            PageId::Numeric(n) => {
                numeric = n.to_string();
                ("pageids", numeric.as_str())
            }
            PageId::Title(title) => ("titles", title),
        };

        let body = self.get(&[
            ("action", "query"),
            ("prop", "info|revisions|extracts"),
            ("inprop", "url"),
            ("rvprop", "ids"),
            ("explaintext", "1"),
            ("redirects", "1"),
            selector,
        ])?;
        let mut record = parse_page(&body, id)?;

        let body = self.get(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("exintro", "1"),
            ("explaintext", "1"),
            ("pageids", record.page_id.as_str()),
        ])?;
        record.summary = parse_extract(&body)?;

        let body = self.get(&[
            ("action", "parse"),
            ("prop", "sections"),
            ("pageid", record.page_id.as_str()),
        ])?;
        record.sections = parse_sections(&body)?;

        info!(title = %record.title, page_id = %record.page_id, "Fetched page");
        Ok(record)
    }

    fn name(&self) -> &'static str {
        "wikipedia"
    }
}

/// Envelope shared by `action=query` and `action=parse` responses.
#[derive(Debug, Deserialize)]
struct Response<T> {
    query: Option<T>,
    parse: Option<T>,
    error: Option<ApiError>,
}

impl<T> Response<T> {
    fn into_result(self) -> Result<Option<T>, SourceError> {
        if let Some(error) = self.error {
            return Err(SourceError::Api {
                code: error.code,
                info: error.info,
            });
        }
        Ok(self.query.or(self.parse))
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    pageid: Option<u64>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    fullurl: Option<String>,
    #[serde(default)]
    revisions: Vec<Revision>,
    #[serde(default)]
    extract: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Revision {
    revid: u64,
    #[serde(default)]
    parentid: u64,
}

#[derive(Debug, Deserialize)]
struct Parse {
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct Section {
    line: String,
}

/// Map the page info response to a record without summary and sections.
fn parse_page(body: &str, id: &str) -> Result<Record, SourceError> {
    let response: Response<Query> = serde_json::from_str(body)?;
    let page = response
        .into_result()?
        .and_then(|query| query.pages.into_iter().next())
        .ok_or_else(|| SourceError::NotFound(id.to_owned()))?;

    if page.missing || page.invalid {
        return Err(SourceError::NotFound(id.to_owned()));
    }
    let page_id = page.pageid.ok_or(SourceError::Malformed("pageid"))?;
    let revision = page
        .revisions
        .first()
        .ok_or(SourceError::Malformed("revisions"))?;

    Ok(Record {
        title: page.title,
        url: page.fullurl.ok_or(SourceError::Malformed("fullurl"))?,
        page_id: page_id.to_string(),
        parent_id: revision.parentid.to_string(),
        revision_id: revision.revid.to_string(),
        content: page.extract.unwrap_or_default(),
        sections: String::new(),
        summary: String::new(),
    })
}

/// Extract of the first page, empty if the page has none.
fn parse_extract(body: &str) -> Result<String, SourceError> {
    let response: Response<Query> = serde_json::from_str(body)?;
    Ok(response
        .into_result()?
        .and_then(|query| query.pages.into_iter().next())
        .and_then(|page| page.extract)
        .unwrap_or_default())
}

/// Section headings joined into one line.
fn parse_sections(body: &str) -> Result<String, SourceError> {
    let response: Response<Parse> = serde_json::from_str(body)?;
    let sections = response
        .into_result()?
        .map(|parse| parse.sections)
        .unwrap_or_default();

    Ok(sections
        .into_iter()
        .map(|section| section.line)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR))
}
