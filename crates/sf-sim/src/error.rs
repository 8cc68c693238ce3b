//! Orchestrator errors.

use sf_core::CoreError;
use sf_store::StoreError;

/// Failures that abort a tick.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
