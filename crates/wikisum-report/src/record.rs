//! Article record.

/// Metadata and content of one article.
///
/// Every field comes from outside the process and may contain
/// markup-significant characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Article title.
    pub title: String,
    /// Canonical article URL.
    pub url: String,
    /// Page identifier.
    pub page_id: String,
    /// Identifier of the revision preceding the current one.
    pub parent_id: String,
    /// Identifier of the current revision.
    pub revision_id: String,
    /// Plain-text article body.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: String,
    /// Section headings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: String,
    /// Plain-text lead section.
    #[cfg_attr(feature = "serde", serde(default))]
    pub summary: String,
}

impl Record {
    /// Create a record carrying only identifying fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        page_id: impl Into<String>,
        parent_id: impl Into<String>,
        revision_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            page_id: page_id.into(),
            parent_id: parent_id.into(),
            revision_id: revision_id.into(),
            ..Self::default()
        }
    }

    /// Set the article body.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the section headings.
    #[must_use]
    pub fn with_sections(mut self, sections: impl Into<String>) -> Self {
        self.sections = sections.into();
        self
    }

    /// Set the lead section.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}
