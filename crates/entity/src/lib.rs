//! Declarative configuration loader for organizational access control.
//!
//! This crate provides:
//! - YAML entity documents (repositories, branch-protection rulesets) with
//!   serde deserialization and an `apiVersion`/`kind`/`name` header
//! - Directory readers that resolve team ownership from file placement,
//!   merge in the archived tree, and detect cross-tree name collisions
//! - Referential validation against collaborator-supplied team and
//!   external-user tables
//! - Order-insensitive policy equivalence for branch-protection rules
//!
//! Everything is synchronous and read-only: the readers walk a
//! [`fs::ConfigFs`] tree, re-reading from scratch on every call, and return
//! validated maps plus separate hard-error and soft-warning lists. Applying
//! the resulting graph against GitHub is a collaborator's job.

pub mod equivalence;
pub mod error;
pub mod fs;
pub mod loader;
pub mod parser;
pub mod schema;
pub mod validation;
