use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a roster player.
///
/// The nil UUID is reserved as the "unassigned" sentinel: it is accepted at
/// API boundaries (assigning it clears a slot) but never stored in an
/// assignment map and never persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Sentinel value representing an empty slot.
    pub const UNASSIGNED: PlayerId = PlayerId(Uuid::nil());

    /// Generate a fresh player id.
    pub fn new() -> Self {
        PlayerId(Uuid::new_v4())
    }

    pub fn is_unassigned(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        PlayerId(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Roster player reference data.
///
/// Owned by the external roster collaborator; the engine never mutates it and
/// only keys on `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    /// Shirt number, when the club has allocated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squad_number: Option<u8>,
}

impl Player {
    pub fn new(display_name: impl Into<String>) -> Self {
        Player { id: PlayerId::new(), display_name: display_name.into(), squad_number: None }
    }

    pub fn with_squad_number(mut self, number: u8) -> Self {
        self.squad_number = Some(number);
        self
    }
}
