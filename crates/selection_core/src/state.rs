//! Global Engine Access
//!
//! Convenience singleton for embedding hosts that keep one editor session
//! per process. The engine itself is single-threaded and synchronous; the
//! lock only guards against re-entrant access from a render pass.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use crate::engine::SelectionEngine;
use crate::fixture::FixtureDefinition;

/// Global selection engine singleton
pub static SELECTION_ENGINE: Lazy<Arc<RwLock<SelectionEngine>>> =
    Lazy::new(|| Arc::new(RwLock::new(SelectionEngine::default())));

/// Get a read lock on the global engine
pub fn get_engine() -> std::sync::RwLockReadGuard<'static, SelectionEngine> {
    SELECTION_ENGINE.read().expect("SELECTION_ENGINE lock poisoned")
}

/// Get a write lock on the global engine
pub fn get_engine_mut() -> std::sync::RwLockWriteGuard<'static, SelectionEngine> {
    SELECTION_ENGINE.write().expect("SELECTION_ENGINE lock poisoned")
}

/// Reset the global engine to a fresh session for a fixture
pub fn reset_engine(fixture: FixtureDefinition) {
    *SELECTION_ENGINE.write().expect("SELECTION_ENGINE lock poisoned") =
        SelectionEngine::new_from_fixture(fixture);
}

/// Replace the entire global engine
pub fn set_engine(engine: SelectionEngine) {
    *SELECTION_ENGINE.write().expect("SELECTION_ENGINE lock poisoned") = engine;
}
