//! Error types for the User service.

use crate::model::UserId;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {id}")]
    NotFound { id: UserId },
}

impl UserError {
    /// The id the failed lookup asked for.
    pub fn id(&self) -> UserId {
        match self {
            UserError::NotFound { id } => *id,
        }
    }
}
