/// Domain module containing the core data types
///
/// This module defines the Thought entity, its identifier, the clock used to
/// date new thoughts and the validation errors for the domain layer.

pub mod thought;
pub mod types;
pub mod clock;

// Re-export public types for easy access
pub use thought::*;
pub use types::*;
pub use clock::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Thought text cannot be empty")]
    EmptyThought,
}
