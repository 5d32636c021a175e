//! Static publications shown when the live source is unavailable.

use std::sync::LazyLock;

use crate::models::Publication;

static FALLBACK: LazyLock<Vec<Publication>> = LazyLock::new(|| {
    vec![
        Publication {
            title: "CerviLearnNet: Advancing Cervical Cancer Diagnosis with Reinforcement \
                    Learning-Enhanced Convolutional Networks"
                .to_string(),
            authors: ["S. Muksimova", "S. Umirzakova", "S. Kang", "Y. Im Cho"]
                .map(String::from)
                .to_vec(),
            year: Some(2024),
            venue: Some("Heliyon".to_string()),
            link: Some("https://www.cell.com/heliyon/fulltext/S2405-8440(24)01151-1".to_string()),
            summary: Some(
                "A reinforcement learning-enhanced convolutional neural network for cervical \
                 cancer diagnosis, with improved accuracy in challenging clinical scenarios."
                    .to_string(),
            ),
            kind: Some("Journal Article".to_string()),
        },
        Publication {
            title: "Fire and Smoke Detection in Complex Environments".to_string(),
            authors: ["F. Safarov", "S. Muksimova", "M. Kamoliddin", "Y. I. Cho"]
                .map(String::from)
                .to_vec(),
            year: Some(2024),
            venue: Some("Fire".to_string()),
            link: Some("https://www.mdpi.com/2571-6255/7/6/276".to_string()),
            summary: Some(
                "Real-time fire and smoke detection for complex, large-scale environments, \
                 supporting effective disaster prevention."
                    .to_string(),
            ),
            kind: Some("Journal Article".to_string()),
        },
    ]
});

/// The fallback list, verbatim. No filtering or pagination applies to it.
#[must_use]
pub fn fallback_publications() -> &'static [Publication] {
    &FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publications::AuthorMatcher;

    #[test]
    fn test_fallback_has_two_titled_entries() {
        let list = fallback_publications();
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn test_fallback_entries_credit_the_principal() {
        let matcher = AuthorMatcher::new("Young Im Cho");
        for publication in fallback_publications() {
            assert!(publication.authors.iter().any(|a| matcher.matches(a)));
        }
    }
}
