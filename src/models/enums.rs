//! Shared rating scale
//!
//! # Serde Casing Conventions
//!
//! The backend serializes every rating-like field as a capitalized word
//! (`"Low"`, `"Medium"`, `"High"`), which matches Rust variant names, so no
//! `rename_all` is needed here.

use serde::{Deserialize, Serialize};

use crate::report::canvas::Rgb;

/// Three-level scale used for risk probability, risk impact, and the
/// claim-level risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    /// Badge color for this rating, matching the dashboard's styling.
    ///
    /// The mapping is exhaustive over the enum so an unhandled rating is a
    /// compile error rather than a silent fallback color.
    pub fn color(&self) -> Rgb {
        match self {
            Rating::Low => Rgb::EMERALD_500,
            Rating::Medium => Rgb::AMBER_500,
            Rating::High => Rgb::RED_500,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Low => write!(f, "Low"),
            Rating::Medium => write!(f, "Medium"),
            Rating::High => write!(f, "High"),
        }
    }
}
