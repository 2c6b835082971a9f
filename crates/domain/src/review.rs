//! Review: a user's opinion about a point of sale.

use serde::{Deserialize, Serialize};

use crate::error::{CampusCoffeeError, ValidationError};
use crate::id::{PosId, ReviewId};
use crate::model::DomainModel;
use crate::time::{Timestamp, now};

/// A review of a [`Pos`](crate::pos::Pos).
///
/// `id` is `None` until the storage layer assigns a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Option<ReviewId>,
    pub pos_id: PosId,
    pub author: String,
    pub comment: String,
    pub created_at: Timestamp,
}

impl Review {
    /// Create a builder for constructing a [`Review`].
    #[must_use]
    pub fn builder() -> ReviewBuilder {
        ReviewBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CampusCoffeeError::Validation`] when `author` is empty.
    pub fn validate(&self) -> Result<(), CampusCoffeeError> {
        if self.author.is_empty() {
            return Err(ValidationError::EmptyAuthor.into());
        }
        Ok(())
    }
}

impl DomainModel<ReviewId> for Review {
    const NAME: &'static str = "Review";

    fn id(&self) -> Option<ReviewId> {
        self.id
    }

    fn set_id(&mut self, id: ReviewId) {
        self.id = Some(id);
    }
}

/// Step-by-step builder for [`Review`].
#[derive(Debug, Default)]
pub struct ReviewBuilder {
    id: Option<ReviewId>,
    pos_id: Option<PosId>,
    author: Option<String>,
    comment: Option<String>,
    created_at: Option<Timestamp>,
}

impl ReviewBuilder {
    #[must_use]
    pub fn id(mut self, id: ReviewId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn pos_id(mut self, pos_id: PosId) -> Self {
        self.pos_id = Some(pos_id);
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Review`].
    ///
    /// # Errors
    ///
    /// Returns [`CampusCoffeeError::Validation`] if `pos_id` was never set
    /// or `author` is missing or empty.
    pub fn build(self) -> Result<Review, CampusCoffeeError> {
        let review = Review {
            id: self.id,
            pos_id: self.pos_id.ok_or(ValidationError::MissingPos)?,
            author: self.author.unwrap_or_default(),
            comment: self.comment.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(now),
        };
        review.validate()?;
        Ok(review)
    }
}
