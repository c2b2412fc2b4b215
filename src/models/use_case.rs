//! Use case model
//!
//! Mirrors the `/use-cases` endpoint payload. Use case ids (`UC-001`, ...)
//! are unique within a set.

use serde::{Deserialize, Serialize};

/// A workflow use case attached to the Business Requirements Document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub title: String,
    pub actor: String,
    pub precondition: String,
    pub scenario: String,
    pub postcondition: String,
    pub success_criteria: String,
}
