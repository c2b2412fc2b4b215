//! Business Requirements Document model
//!
//! Mirrors the `/brd` endpoint payload: document metadata plus an ordered
//! list of sections. A section carries free-text content, a bulleted
//! requirement list, or neither; the renderer handles any combination.

use serde::{Deserialize, Serialize};

/// A Business Requirements Document as supplied by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brd {
    pub title: String,
    pub version: String,
    /// Display date, free-form (e.g. "January 2026").
    pub date: String,
    pub project: String,
    /// Sections in presentation order.
    pub sections: Vec<BrdSection>,
}

/// One BRD section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrdSection {
    pub title: String,
    /// Narrative text, if the section has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Bulleted requirement lines, if the section has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
}
