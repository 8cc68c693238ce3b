//! Store-level errors.

use sf_core::{StationId, UnitId};

/// Failures raised by a [`FleetStore`][crate::FleetStore] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unknown unit {0} in commit batch")]
    UnitNotFound(UnitId),

    #[error("unknown station {0} in commit batch")]
    StationNotFound(StationId),

    #[error("duplicate {kind} identity {value}")]
    DuplicateIdentity { kind: &'static str, value: String },

    /// Backend-specific failure (I/O, connection, serialization).
    #[error("store backend: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
