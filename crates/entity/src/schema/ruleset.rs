//! Branch-protection ruleset documents.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Parameters attached to a single branch-protection rule.
///
/// Two logical groups share one value object: pull-request review settings
/// and required-status-check settings. Compared structurally, never by
/// identity; order-insensitive comparison of the status-check list lives in
/// the equivalence engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSetParameters {
    // Pull-request review settings.
    #[serde(rename = "dismissStaleReviewsOnPush", default)]
    pub dismiss_stale_reviews_on_push: bool,
    #[serde(rename = "requireCodeOwnerReview", default)]
    pub require_code_owner_review: bool,
    #[serde(rename = "requiredApprovingReviewCount", default)]
    pub required_approving_review_count: i32,
    #[serde(rename = "requiredReviewThreadResolution", default)]
    pub required_review_thread_resolution: bool,
    #[serde(rename = "requireLastPushApproval", default)]
    pub require_last_push_approval: bool,

    // Required-status-check settings.
    #[serde(rename = "requiredStatusChecks", default)]
    pub required_status_checks: Vec<String>,
    #[serde(rename = "strictRequiredStatusChecksPolicy", default)]
    pub strict_required_status_checks_policy: bool,
}

/// An app allowed to bypass the ruleset, and under which mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BypassApp {
    #[serde(default)]
    pub appname: String,
    /// `always` or `pull_request`.
    #[serde(default)]
    pub mode: String,
}

/// Branch scope of a ruleset.
///
/// `include` entries are literal branch names or one of the two sentinels
/// `~DEFAULT_BRANCH` / `~ALL`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchSelection {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// One typed rule inside a ruleset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rule {
    /// `required_signatures`, `pull_request` or `required_status_checks`.
    #[serde(default)]
    pub ruletype: String,
    #[serde(default)]
    pub parameters: RuleSetParameters,
}

/// The policy body shared by named rulesets and per-repository overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSetDefinition {
    /// `disable`, `active` or `evaluate`.
    #[serde(default)]
    pub enforcement: String,
    #[serde(default)]
    pub bypassapps: Vec<BypassApp>,
    #[serde(default)]
    pub on: BranchSelection,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// A named branch-protection ruleset, one per file in the rulesets directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleSet {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(default)]
    pub spec: RuleSetDefinition,
}

/// A ruleset embedded in a repository's spec, referencing a named ruleset or
/// defining an inline override.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryRuleSet {
    #[serde(flatten)]
    pub definition: RuleSetDefinition,
    #[serde(default)]
    pub name: String,
}
