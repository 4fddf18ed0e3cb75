//! Directory readers: turn a configuration tree into validated entity maps.
//!
//! Both readers accumulate hard errors and soft warnings into a
//! [`LoadOutcome`](crate::error::LoadOutcome) and keep scanning past bad
//! files, so one pass reports as many problems as possible. A missing
//! optional directory yields empty results, not an error.

mod repositories;
mod rulesets;


pub use repositories::{read_repositories, TEAM_METADATA_FILE};
pub use rulesets::read_ruleset_directory;
