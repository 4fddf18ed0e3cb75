//! Closed enums for the string-tagged fields of ruleset documents.
//!
//! Serialized documents carry the raw strings so that validation, not the
//! parser, reports a bad value together with the offending file name. The
//! enums are produced by `FromStr` and give downstream code (notably the
//! equivalence engine) compiler-checked exhaustive dispatch.

use std::fmt;
use std::str::FromStr;

/// Branch-selection sentinel matching the repository's default branch.
pub const INCLUDE_DEFAULT_BRANCH: &str = "~DEFAULT_BRANCH";

/// Branch-selection sentinel matching every branch.
pub const INCLUDE_ALL: &str = "~ALL";

/// Supported branch-protection rule types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    RequiredSignatures,
    PullRequest,
    RequiredStatusChecks,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleType::RequiredSignatures => write!(f, "required_signatures"),
            RuleType::PullRequest => write!(f, "pull_request"),
            RuleType::RequiredStatusChecks => write!(f, "required_status_checks"),
        }
    }
}

impl FromStr for RuleType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "required_signatures" => Ok(RuleType::RequiredSignatures),
            "pull_request" => Ok(RuleType::PullRequest),
            "required_status_checks" => Ok(RuleType::RequiredStatusChecks),
            other => Err(format!("unknown ruletype: '{}'", other)),
        }
    }
}

/// Ruleset enforcement modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enforcement {
    Disable,
    Active,
    Evaluate,
}

impl fmt::Display for Enforcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Enforcement::Disable => write!(f, "disable"),
            Enforcement::Active => write!(f, "active"),
            Enforcement::Evaluate => write!(f, "evaluate"),
        }
    }
}

impl FromStr for Enforcement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "disable" => Ok(Enforcement::Disable),
            "active" => Ok(Enforcement::Active),
            "evaluate" => Ok(Enforcement::Evaluate),
            other => Err(format!("unknown enforcement: '{}'", other)),
        }
    }
}

/// Modes under which a bypass app may skip a ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BypassMode {
    Always,
    PullRequest,
}

impl fmt::Display for BypassMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BypassMode::Always => write!(f, "always"),
            BypassMode::PullRequest => write!(f, "pull_request"),
        }
    }
}

impl FromStr for BypassMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "always" => Ok(BypassMode::Always),
            "pull_request" => Ok(BypassMode::PullRequest),
            other => Err(format!("unknown bypass mode: '{}'", other)),
        }
    }
}
