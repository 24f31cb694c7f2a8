use thiserror::Error;

/// Failure of an explicit save.
///
/// The local `SelectionState` stays authoritative either way: a failed save
/// is retried without the user redoing any in-memory edits.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The replace was rejected before anything was deleted; the previously
    /// saved selections are still stored.
    #[error("save rejected, previously stored selections left in place: {0:#}")]
    ReplaceRejected(anyhow::Error),
    /// The delete phase succeeded but the insert phase failed: the store now
    /// holds no selections for the fixture. Distinct from a rejection so the
    /// caller retries instead of assuming a no-op failure.
    #[error("partial replace: stored selections were deleted but the new records were not written: {0:#}")]
    PartialReplace(anyhow::Error),
}

impl SaveError {
    /// True when the external store was left without any selections and a
    /// retry is required to restore a persisted state.
    pub fn is_partial_replace(&self) -> bool {
        matches!(self, SaveError::PartialReplace(_))
    }

    /// All save failures are recoverable by retrying; the in-memory state is
    /// never damaged by a failed save.
    pub fn is_recoverable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_replace_is_distinguishable() {
        let err = SaveError::PartialReplace(anyhow::anyhow!("connection reset"));
        assert!(err.is_partial_replace());
        assert!(err.to_string().contains("partial replace"));

        let err = SaveError::ReplaceRejected(anyhow::anyhow!("backend down"));
        assert!(!err.is_partial_replace());
    }
}
