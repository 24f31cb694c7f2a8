use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::PlayerId;

/// Performance-category tag attached to an assignment.
///
/// Records arriving without a tag fall back to `PerformanceCategory::default()`.
/// NOTE: a missing tag arguably indicates incomplete data entry rather than a
/// valid default; the fallback is kept for compatibility with existing data.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceCategory(String);

impl PerformanceCategory {
    pub const DEFAULT_TAG: &'static str = "STANDARD";

    pub fn new(tag: impl AsRef<str>) -> Self {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            Self::default()
        } else {
            PerformanceCategory(tag.to_uppercase())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PerformanceCategory {
    fn default() -> Self {
        PerformanceCategory(Self::DEFAULT_TAG.to_string())
    }
}

impl fmt::Display for PerformanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One occupied slot within a period.
///
/// Empty slots are not stored: absence of a key in a period's assignment map
/// means "unassigned", so every `Assignment` holds a real player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub player_id: PlayerId,
    /// Canonical label of the owning slot. Kept on the assignment because it
    /// is the value that crosses the persistence boundary; the store is the
    /// single writer and keeps it equal to the slot key's label.
    pub position_label: String,
    /// True iff the assignment occupies a bench slot.
    #[serde(default)]
    pub is_substitution: bool,
    #[serde(default)]
    pub performance_category: PerformanceCategory,
}

impl Assignment {
    pub fn new(player_id: PlayerId, position_label: impl Into<String>, is_substitution: bool) -> Self {
        Assignment {
            player_id,
            position_label: position_label.into(),
            is_substitution,
            performance_category: PerformanceCategory::default(),
        }
    }

    pub fn with_category(mut self, category: PerformanceCategory) -> Self {
        self.performance_category = category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_category_falls_back_to_default() {
        assert_eq!(PerformanceCategory::new(""), PerformanceCategory::default());
        assert_eq!(PerformanceCategory::new("  "), PerformanceCategory::default());
        assert_eq!(PerformanceCategory::new("hearts").as_str(), "HEARTS");
    }

    #[test]
    fn assignment_serde_defaults() {
        let json = r#"{"player_id":"00000000-0000-0000-0000-000000000001","position_label":"GK"}"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert!(!assignment.is_substitution);
        assert_eq!(assignment.performance_category, PerformanceCategory::default());
    }
}
