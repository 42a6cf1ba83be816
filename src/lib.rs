//! Fixture-backed relation data for tests.
//!
//! [`relation::snapshot::RelationSnapshot`] answers the queries of a
//! relation-data client from literal fixture data, so code that reads
//! relations can be exercised without a live configuration backend.

pub mod config;
pub mod relation;
