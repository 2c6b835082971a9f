//! Error conventions used across the workspace.
//!
//! Each layer raises a typed error; [`CampusCoffeeError`] is the outer enum
//! that crosses crate boundaries, converting via `#[from]`. Services never
//! translate, wrap, or swallow these errors: whatever a storage adapter
//! raises is what the caller sees.

use std::error::Error as StdError;

/// Top-level error for all campuscoffee operations.
#[derive(Debug, thiserror::Error)]
pub enum CampusCoffeeError {
    /// A domain invariant failed while constructing an entity.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested identifier does not correspond to any stored entity.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A uniqueness constraint was violated while persisting an entity.
    #[error(transparent)]
    Duplicate(#[from] DuplicateError),

    /// Any other failure raised by a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Raised when a lookup misses.
///
/// The message wording is uniform system-wide; the update branch of an
/// upsert surfaces exactly the same error as a direct lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with id '{id}' could not be found.")]
pub struct NotFoundError {
    /// Entity name as shown to clients.
    pub entity: &'static str,
    /// The identifier that missed, already rendered.
    pub id: String,
}

/// Raised when a unique field collides with an already-stored entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with {field} '{value}' already exists.")]
pub struct DuplicateError {
    /// Entity name as shown to clients.
    pub entity: &'static str,
    /// The unique field that collided.
    pub field: &'static str,
    /// The offending value.
    pub value: String,
}

/// Domain construction invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A point of sale needs a name.
    #[error("name must not be empty")]
    EmptyName,
    /// A review needs an author.
    #[error("author must not be empty")]
    EmptyAuthor,
    /// A point of sale needs a campus.
    #[error("campus is required")]
    MissingCampus,
    /// A point of sale needs a type.
    #[error("pos type is required")]
    MissingPosType,
    /// A review must reference a point of sale.
    #[error("review must reference a point of sale")]
    MissingPos,
    /// Unrecognized campus label (e.g. from a database row).
    #[error("unknown campus '{0}'")]
    UnknownCampus(String),
    /// Unrecognized pos type label (e.g. from a database row).
    #[error("unknown pos type '{0}'")]
    UnknownPosType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_message() {
        let err = NotFoundError {
            entity: "Pos",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Pos with id '42' could not be found.");
    }

    #[test]
    fn should_format_duplicate_message() {
        let err = DuplicateError {
            entity: "Pos",
            field: "name",
            value: "Mensa".to_string(),
        };
        assert_eq!(err.to_string(), "Pos with name 'Mensa' already exists.");
    }

    #[test]
    fn should_preserve_inner_message_through_outer_enum() {
        let err = CampusCoffeeError::from(NotFoundError {
            entity: "Review",
            id: "7".to_string(),
        });
        assert_eq!(err.to_string(), "Review with id '7' could not be found.");
    }
}
