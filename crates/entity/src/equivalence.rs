//! Policy-level equivalence of branch-protection rule parameters.
//!
//! Used by the reconciliation layer to decide whether a desired and an
//! observed rule configuration are effectively identical. Pure functions:
//! no filesystem, no side effects.

use std::collections::HashMap;
use std::str::FromStr;

use crate::schema::{RuleSetParameters, RuleType};

impl RuleType {
    /// Whether `left` and `right` configure this rule type identically.
    ///
    /// List ordering is ignored where order is not semantically meaningful
    /// (status-check names); every scalar field must match exactly.
    pub fn parameters_equivalent(
        &self,
        left: &RuleSetParameters,
        right: &RuleSetParameters,
    ) -> bool {
        match self {
            // The rule has no parameters.
            RuleType::RequiredSignatures => true,
            RuleType::PullRequest => {
                left.dismiss_stale_reviews_on_push == right.dismiss_stale_reviews_on_push
                    && left.require_code_owner_review == right.require_code_owner_review
                    && left.required_approving_review_count
                        == right.required_approving_review_count
                    && left.required_review_thread_resolution
                        == right.required_review_thread_resolution
                    && left.require_last_push_approval == right.require_last_push_approval
            }
            RuleType::RequiredStatusChecks => {
                let (equal, _, _) = string_set_equivalent(
                    &left.required_status_checks,
                    &right.required_status_checks,
                );
                equal
                    && left.strict_required_status_checks_policy
                        == right.strict_required_status_checks_policy
            }
        }
    }
}

/// String-tag entry point for callers holding an observed rule type.
///
/// An unrecognized tag is non-equivalent: the comparison fails closed.
pub fn compare_ruleset_parameters(
    ruletype: &str,
    left: &RuleSetParameters,
    right: &RuleSetParameters,
) -> bool {
    match RuleType::from_str(ruletype) {
        Ok(rt) => rt.parameters_equivalent(left, right),
        Err(_) => false,
    }
}

/// Order-insensitive multiset comparison of two string lists.
///
/// Returns whether the lists carry the same names, plus the symmetric
/// difference (entries only on the left, entries only on the right, each
/// repeated per surplus occurrence and sorted) for diagnostics.
pub fn string_set_equivalent(
    left: &[String],
    right: &[String],
) -> (bool, Vec<String>, Vec<String>) {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for l in left {
        *counts.entry(l.as_str()).or_insert(0) += 1;
    }
    for r in right {
        *counts.entry(r.as_str()).or_insert(0) -= 1;
    }

    let mut left_only = Vec::new();
    let mut right_only = Vec::new();
    for (name, count) in counts {
        for _ in 0..count.abs() {
            if count > 0 {
                left_only.push(name.to_string());
            } else if count < 0 {
                right_only.push(name.to_string());
            }
        }
    }
    left_only.sort();
    right_only.sort();

    let equal = left_only.is_empty() && right_only.is_empty();
    (equal, left_only, right_only)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checks(names: &[&str]) -> RuleSetParameters {
        RuleSetParameters {
            required_status_checks: names.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn required_signatures_always_equivalent() {
        let a = checks(&["ci"]);
        let b = RuleSetParameters {
            require_code_owner_review: true,
            ..Default::default()
        };
        assert!(RuleType::RequiredSignatures.parameters_equivalent(&a, &b));
    }

    #[test]
    fn status_checks_order_insensitive() {
        let left = checks(&["a", "b"]);
        let right = checks(&["b", "a"]);
        assert!(RuleType::RequiredStatusChecks.parameters_equivalent(&left, &right));
        assert!(compare_ruleset_parameters("required_status_checks", &left, &right));
    }

    #[test]
    fn strict_flag_alone_breaks_equivalence() {
        let left = checks(&["a", "b"]);
        let mut right = checks(&["b", "a"]);
        right.strict_required_status_checks_policy = true;
        assert!(!RuleType::RequiredStatusChecks.parameters_equivalent(&left, &right));
    }

    #[test]
    fn pull_request_any_field_flip_breaks_equivalence() {
        let base = RuleSetParameters {
            dismiss_stale_reviews_on_push: true,
            require_code_owner_review: false,
            required_approving_review_count: 2,
            required_review_thread_resolution: true,
            require_last_push_approval: false,
            ..Default::default()
        };
        assert!(RuleType::PullRequest.parameters_equivalent(&base, &base.clone()));

        let flips: Vec<RuleSetParameters> = vec![
            RuleSetParameters {
                dismiss_stale_reviews_on_push: false,
                ..base.clone()
            },
            RuleSetParameters {
                require_code_owner_review: true,
                ..base.clone()
            },
            RuleSetParameters {
                required_approving_review_count: 3,
                ..base.clone()
            },
            RuleSetParameters {
                required_review_thread_resolution: false,
                ..base.clone()
            },
            RuleSetParameters {
                require_last_push_approval: true,
                ..base.clone()
            },
        ];
        for flipped in flips {
            assert!(!RuleType::PullRequest.parameters_equivalent(&base, &flipped));
        }
    }

    #[test]
    fn pull_request_ignores_status_check_fields() {
        let left = RuleSetParameters {
            required_approving_review_count: 1,
            required_status_checks: vec!["ci".into()],
            ..Default::default()
        };
        let right = RuleSetParameters {
            required_approving_review_count: 1,
            ..Default::default()
        };
        assert!(RuleType::PullRequest.parameters_equivalent(&left, &right));
    }

    #[test]
    fn unknown_ruletype_fails_closed() {
        let p = RuleSetParameters::default();
        assert!(!compare_ruleset_parameters("creation", &p, &p));
        assert!(!compare_ruleset_parameters("", &p, &p));
    }

    #[test]
    fn symmetric_difference_reported() {
        let left = vec!["a".to_string(), "b".to_string(), "b".to_string()];
        let right = vec!["b".to_string(), "c".to_string()];
        let (equal, left_only, right_only) = string_set_equivalent(&left, &right);
        assert!(!equal);
        assert_eq!(left_only, vec!["a", "b"]);
        assert_eq!(right_only, vec!["c"]);
    }

    #[test]
    fn empty_lists_are_equivalent() {
        let (equal, left_only, right_only) = string_set_equivalent(&[], &[]);
        assert!(equal);
        assert!(left_only.is_empty());
        assert!(right_only.is_empty());
    }
}
