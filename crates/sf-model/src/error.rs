//! Record validation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{kind} record has a blank id or code")]
    BlankIdentity { kind: &'static str },

    #[error("{kind} {id}: field {field} is not finite")]
    NonFinite {
        kind:  &'static str,
        id:    String,
        field: &'static str,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;
