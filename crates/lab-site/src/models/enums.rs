//! Enumeration types for the publications panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// External search engine used for "see all" deep links.
const SCHOLAR_SEARCH_URL: &str = "https://scholar.google.com/scholar";

/// Publication category shown as a filter button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Everything by the lab.
    #[default]
    All,
    /// General AI research.
    Research,
    /// AI ethics and standardization.
    Ethics,
    /// Computer vision.
    Vision,
    /// Natural language processing.
    Nlp,
    /// AI engineering and systems.
    Engineering,
}

impl Category {
    /// Every category, in button order.
    pub const ALL: [Self; 6] =
        [Self::All, Self::Research, Self::Ethics, Self::Vision, Self::Nlp, Self::Engineering];

    /// Stable identifier used in URLs and forms.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Research => "research",
            Self::Ethics => "ethics",
            Self::Vision => "vision",
            Self::Nlp => "nlp",
            Self::Engineering => "engineering",
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Publications",
            Self::Research => "Research",
            Self::Ethics => "AI Ethics",
            Self::Vision => "Computer Vision",
            Self::Nlp => "NLP",
            Self::Engineering => "Engineering",
        }
    }

    /// Free-text query sent to the search API.
    #[must_use]
    pub const fn query(self) -> &'static str {
        match self {
            Self::All => "Young Im Cho",
            Self::Research => "Young Im Cho artificial intelligence",
            Self::Ethics => "Young Im Cho AI standardization trustworthiness",
            Self::Vision => "Young Im Cho image detection",
            Self::Nlp => "Young Im Cho natural language processing",
            Self::Engineering => "Young Im Cho smart city system",
        }
    }

    /// Link to the same query on the external search engine.
    #[must_use]
    pub fn deep_link(self) -> String {
        let q: String = url::form_urlencoded::byte_serialize(self.query().as_bytes()).collect();
        format!("{SCHOLAR_SEARCH_URL}?q={q}")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SiteError::UnknownCategory(needle.to_string()))
    }
}
