//! Slot identifiers.
//!
//! A slot is an addressable place a player may occupy within one period:
//! either a formation position (`"GK"`, `"DCL"`, ...) or a numbered bench
//! slot (`"sub-<n>"`). The two kinds are a closed tagged variant so that an
//! invalid slot is a type-level concern, not a runtime string-parsing one.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Prefix of every substitute slot label.
pub const SUB_LABEL_PREFIX: &str = "sub-";

/// Uppercase short code naming a place in the formation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionCode(String);

impl PositionCode {
    /// Build a code, normalizing to uppercase (the source data carried
    /// mixed-case codes).
    pub fn new(code: impl AsRef<str>) -> Self {
        PositionCode(code.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Addressable place in the formation or on the bench.
///
/// Ordering puts formation positions before bench slots, positions by code
/// and bench slots by index, so snapshot iteration is stable for rendering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotId {
    /// On-pitch formation slot.
    Position(PositionCode),
    /// Bench slot, labelled `sub-<index>`. Indices are allocated from a
    /// per-period monotonic counter and never reused.
    Substitute(u32),
}

impl SlotId {
    pub fn position(code: impl AsRef<str>) -> Self {
        SlotId::Position(PositionCode::new(code))
    }

    pub fn substitute(index: u32) -> Self {
        SlotId::Substitute(index)
    }

    pub fn is_substitute(&self) -> bool {
        matches!(self, SlotId::Substitute(_))
    }

    /// Canonical label: the position code, or `sub-<index>`.
    ///
    /// The label is the only representation that crosses the persistence
    /// boundary, so `label` / `FromStr` must stay a bijection.
    pub fn label(&self) -> String {
        match self {
            SlotId::Position(code) => code.to_string(),
            SlotId::Substitute(index) => format!("{SUB_LABEL_PREFIX}{index}"),
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Error parsing a slot label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLabelError {
    pub label: String,
}

impl fmt::Display for SlotLabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid slot label: {:?}", self.label)
    }
}

impl std::error::Error for SlotLabelError {}

impl FromStr for SlotId {
    type Err = SlotLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(rest) = trimmed.strip_prefix(SUB_LABEL_PREFIX) {
            let index =
                rest.parse::<u32>().map_err(|_| SlotLabelError { label: s.to_string() })?;
            return Ok(SlotId::Substitute(index));
        }
        if trimmed.is_empty() {
            return Err(SlotLabelError { label: s.to_string() });
        }
        Ok(SlotId::Position(PositionCode::new(trimmed)))
    }
}

// Serialized as the canonical label so slot-keyed maps stay plain JSON
// objects ({"GK": ..., "sub-0": ...}).
impl Serialize for SlotId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for SlotId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(de::Error::custom)
    }
}
