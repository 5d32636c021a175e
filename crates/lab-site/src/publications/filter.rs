//! Author filter for remote search results.
//!
//! Keyword search returns plenty of papers that merely mention the lab's
//! principal; only papers that list them as an author are kept. Matching is
//! best-effort: author-name formatting varies between sources, so false
//! negatives are possible.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Paper;

static NAME_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s.,\-]+").expect("valid separator regex"));

/// Matches author names against one target name.
#[derive(Debug, Clone)]
pub struct AuthorMatcher {
    target: Vec<String>,
}

impl AuthorMatcher {
    /// Create a matcher for `target` (e.g. "Young Im Cho").
    #[must_use]
    pub fn new(target: &str) -> Self {
        Self { target: tokenize(target) }
    }

    /// Check whether `name` refers to the target author.
    ///
    /// Comparison ignores case, punctuation and extra whitespace. Given names
    /// may be abbreviated to initials or run together; the surname must be
    /// spelled out. Surname-first order is accepted.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let candidate = tokenize(name);
        if candidate.is_empty() || self.target.is_empty() {
            return false;
        }

        if align(&candidate, &self.target) {
            return true;
        }

        // "Cho Young Im" -> "Young Im Cho"
        let mut rotated = candidate;
        rotated.rotate_left(1);
        align(&rotated, &self.target)
    }

    /// Check whether any of the paper's authors is the target.
    #[must_use]
    pub fn matches_paper(&self, paper: &Paper) -> bool {
        paper.author_names().any(|name| self.matches(name))
    }

    /// Keep only papers authored by the target, preserving order.
    #[must_use]
    pub fn retain(&self, papers: Vec<Paper>) -> Vec<Paper> {
        papers.into_iter().filter(|p| self.matches_paper(p)).collect()
    }
}

fn tokenize(name: &str) -> Vec<String> {
    NAME_SEPARATORS
        .split(&name.to_lowercase())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn align(candidate: &[String], target: &[String]) -> bool {
    let Some((first, rest)) = candidate.split_first() else {
        return target.is_empty();
    };
    if target.is_empty() {
        return false;
    }

    let is_surname = target.len() == 1;
    if token_matches(first, &target[0], is_surname) && align(rest, &target[1..]) {
        return true;
    }

    // Run-together given names: "youngim" covers "young" + "im".
    (2..target.len()).any(|k| *first == target[..k].concat() && align(rest, &target[k..]))
}

fn token_matches(candidate: &str, target: &str, is_surname: bool) -> bool {
    candidate == target
        || (!is_surname && candidate.chars().count() == 1 && target.starts_with(candidate))
}
