//! Paper data model matching the remote search API schema.

use serde::{Deserialize, Serialize};

/// A paper as returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Unique paper ID.
    #[serde(default)]
    pub paper_id: String,

    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Publication venue (journal or conference).
    #[serde(default)]
    pub venue: Option<String>,

    /// Landing page on the search provider.
    #[serde(default)]
    pub url: Option<String>,

    /// List of authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
}

impl Paper {
    /// Get the title if it is present and not blank.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Get author names in order, skipping unnamed entries.
    pub fn author_names(&self) -> impl Iterator<Item = &str> {
        self.authors.iter().filter_map(|a| a.name.as_deref())
    }

    /// Venue, treating the API's empty string as absent.
    #[must_use]
    pub fn venue_text(&self) -> Option<&str> {
        self.venue.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Author reference embedded in a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    /// Author ID (absent for unresolved authors).
    #[serde(default)]
    pub author_id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthorRef {
    /// Create a named author reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { author_id: None, name: Some(name.into()) }
    }
}

/// Search result wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: u64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: u32,

    /// Offset of the next page, if any.
    #[serde(default)]
    pub next: Option<u32>,

    /// List of papers in this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let json = r#"{"paperId": "abc123"}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.paper_id, "abc123");
        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "paperId": "abc123",
            "title": "Fire and Smoke Detection",
            "year": 2024,
            "venue": "Fire",
            "url": "https://www.semanticscholar.org/paper/abc123",
            "authors": [{"authorId": "1", "name": "F. Safarov"}, {"authorId": null, "name": "Y. Cho"}]
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.title_text(), Some("Fire and Smoke Detection"));
        assert_eq!(paper.year, Some(2024));
        assert_eq!(paper.venue_text(), Some("Fire"));
        assert_eq!(paper.author_names().collect::<Vec<_>>(), vec!["F. Safarov", "Y. Cho"]);
    }

    #[test]
    fn test_blank_title_and_venue_are_absent() {
        let json = r#"{"paperId": "x", "title": "   ", "venue": ""}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert!(paper.title_text().is_none());
        assert!(paper.venue_text().is_none());
    }

    #[test]
    fn test_search_result() {
        let json = r#"{"total": 25, "offset": 0, "next": 10, "data": []}"#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total, 25);
        assert_eq!(result.next, Some(10));
    }

    #[test]
    fn test_search_result_last_page_has_no_next() {
        let json = r#"{"total": 3, "offset": 0, "data": [{"paperId": "a"}]}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.next, None);
        assert_eq!(result.data.len(), 1);
    }
}
