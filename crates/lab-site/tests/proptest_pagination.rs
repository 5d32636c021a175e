//! Property-based tests for pagination and the author filter.

use proptest::prelude::*;

use lab_site::publications::{AuthorMatcher, PageState};

#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Previous,
    Reset,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Next), Just(Step::Previous), Just(Step::Reset)]
}

proptest! {
    /// Total pages is the ceiling of total / page size and never zero.
    #[test]
    fn total_pages_is_ceiling(total in 0u64..100_000, page_size in 1u32..100) {
        let mut state = PageState::new(page_size);
        state.set_total(total);

        let pages = u64::from(state.total_pages());
        prop_assert!(pages >= 1);
        prop_assert!(pages * u64::from(page_size) >= total);
        if total > 0 {
            prop_assert!((pages - 1) * u64::from(page_size) < total);
        }
    }

    /// No sequence of moves leaves the page outside `1..=total_pages`.
    #[test]
    fn page_stays_in_bounds(
        total in 0u64..500,
        page_size in 1u32..20,
        steps in proptest::collection::vec(arb_step(), 0..60),
    ) {
        let mut state = PageState::new(page_size);
        state.set_total(total);

        for step in steps {
            let before = state.page();
            let moved = match step {
                Step::Next => state.next(),
                Step::Previous => state.previous(),
                Step::Reset => { state.reset(); true }
            };
            if !moved {
                prop_assert_eq!(state.page(), before);
            }
            prop_assert!(state.page() >= 1);
            prop_assert!(state.page() <= state.total_pages());
            prop_assert_eq!(state.has_previous(), state.page() > 1);
            prop_assert_eq!(state.has_next(), state.page() < state.total_pages());
            prop_assert_eq!(state.offset(), (state.page() - 1) * page_size);
        }
    }

    /// Case and punctuation never change whether a name matches.
    #[test]
    fn matcher_ignores_case_and_punctuation(upper in any::<bool>(), sep in "[ .,-]{1,3}") {
        let matcher = AuthorMatcher::new("Young Im Cho");
        let name = format!("Young{sep}Im{sep}Cho");
        let name = if upper { name.to_uppercase() } else { name.to_lowercase() };
        prop_assert!(matcher.matches(&name), "{name} should match");
    }

    /// A different surname never matches, whatever precedes it.
    #[test]
    fn matcher_requires_surname(given in "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8})?", surname in "[A-Z][a-z]{3,8}") {
        prop_assume!(surname.to_lowercase() != "cho");
        prop_assume!(!given.to_lowercase().split(' ').any(|t| t == "cho"));
        let matcher = AuthorMatcher::new("Young Im Cho");
        let name = format!("{given} {surname}");
        prop_assert!(!matcher.matches(&name), "{name} should not match");
    }
}
