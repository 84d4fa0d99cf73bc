//! Pure text operations for the replacement engine.

use crate::core::types::ReplacementPlan;

/// Count non-overlapping literal occurrences of the plan's search string.
pub fn count_occurrences(plan: &ReplacementPlan, text: &str) -> usize {
    text.matches(plan.search()).count()
}

/// Replace every non-overlapping literal occurrence of the search string.
pub fn substitute(plan: &ReplacementPlan, text: &str) -> String {
    text.replace(plan.search(), plan.replace())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(search: &str, replace: &str) -> ReplacementPlan {
        ReplacementPlan::new(search, replace).expect("plan")
    }

    #[test]
    fn counts_are_non_overlapping() {
        let p = plan("aa", "b");
        assert_eq!(count_occurrences(&p, "aaaa"), 2);
        assert_eq!(count_occurrences(&p, "aaa"), 1);
    }

    #[test]
    fn counts_zero_when_absent() {
        let p = plan("foo", "bar");
        assert_eq!(count_occurrences(&p, "baz"), 0);
    }

    #[test]
    fn substitute_replaces_all_occurrences() {
        let p = plan("foo", "qux");
        assert_eq!(substitute(&p, "foo bar foo"), "qux bar qux");
    }

    #[test]
    fn substitute_with_identical_pair_is_a_no_op() {
        let p = plan("same", "same");
        assert_eq!(substitute(&p, "same old same"), "same old same");
    }
}
