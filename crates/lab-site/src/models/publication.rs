//! Display-ready publication record.

use serde::Serialize;

use super::Paper;

/// A publication as shown on a card, independent of where it came from.
///
/// `title` is always present; every other field is omitted from the card
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Publication type label, e.g. "Journal Article".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Publication {
    /// Create a publication with only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            authors: Vec::new(),
            year: None,
            venue: None,
            link: None,
            summary: None,
            kind: None,
        }
    }

    /// Normalize a remote paper. Papers without a usable title are dropped.
    #[must_use]
    pub fn from_paper(paper: &Paper) -> Option<Self> {
        let title = paper.title_text()?;
        Some(Self {
            title: title.to_string(),
            authors: paper.author_names().map(str::to_string).collect(),
            year: paper.year,
            venue: paper.venue_text().map(str::to_string),
            link: paper.url.clone().filter(|u| !u.is_empty()),
            summary: paper.r#abstract.clone().filter(|a| !a.trim().is_empty()),
            kind: None,
        })
    }

    /// Authors joined for display, or `None` when the list is empty.
    #[must_use]
    pub fn author_line(&self) -> Option<String> {
        if self.authors.is_empty() { None } else { Some(self.authors.join(", ")) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthorRef;

    #[test]
    fn test_from_paper_maps_fields() {
        let paper = Paper {
            paper_id: "p1".into(),
            title: Some("RL-Cervix.Net".into()),
            year: Some(2025),
            venue: Some("Diagnostics".into()),
            url: Some("https://example.org/p1".into()),
            authors: vec![AuthorRef::named("S. Muksimova"), AuthorRef::default()],
            ..Default::default()
        };

        let publication = Publication::from_paper(&paper).unwrap();
        assert_eq!(publication.title, "RL-Cervix.Net");
        assert_eq!(publication.authors, vec!["S. Muksimova"]);
        assert_eq!(publication.venue.as_deref(), Some("Diagnostics"));
        assert_eq!(publication.link.as_deref(), Some("https://example.org/p1"));
        assert!(publication.summary.is_none());
    }

    #[test]
    fn test_from_paper_without_title_is_dropped() {
        let paper = Paper { paper_id: "p2".into(), ..Default::default() };
        assert!(Publication::from_paper(&paper).is_none());
    }

    #[test]
    fn test_author_line() {
        let mut publication = Publication::titled("T");
        assert!(publication.author_line().is_none());
        publication.authors = vec!["A".into(), "B".into()];
        assert_eq!(publication.author_line().as_deref(), Some("A, B"));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let json = serde_json::to_value(Publication::titled("Only a title")).unwrap();
        assert_eq!(json["title"], "Only a title");
        assert!(json.get("year").is_none());
        assert!(json.get("abstract").is_none());
    }
}
