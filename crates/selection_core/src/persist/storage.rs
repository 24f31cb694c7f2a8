//! Storage collaborator boundary.
//!
//! Persistence is a full delete-then-insert replace, not a diff-based
//! upsert. The two phases can fail independently and the caller must be able
//! to tell them apart: a failed delete leaves the previous selections in
//! place, a failed insert leaves the store empty.

use thiserror::Error;

use crate::fixture::FixtureId;

use super::record::SelectionRecord;

/// Failure of a replace call, split by phase.
///
/// Causes are opaque external errors (network, backend), carried as
/// `anyhow::Error`.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// The delete phase failed; the previous selections are still stored.
    #[error("delete phase failed: {0:#}")]
    DeleteFailed(anyhow::Error),
    /// The insert phase failed after the delete succeeded; nothing is
    /// stored for the fixture anymore.
    #[error("insert phase failed after delete: {0:#}")]
    InsertFailed(anyhow::Error),
}

/// External selection storage.
///
/// The engine performs no queuing, no cancellation, and no optimistic
/// locking against this collaborator; callers serialize save invocations or
/// accept last-write-wins at the storage layer.
pub trait StorageClient {
    /// Replace every stored selection for the fixture with `records`.
    fn replace_selections(
        &self,
        fixture: FixtureId,
        records: &[SelectionRecord],
    ) -> Result<(), ReplaceError>;
}
