//! Shared application state for axum handlers.

use std::sync::Arc;

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_app::services::{PosService, ReviewService};
use campuscoffee_domain::id::{PosId, ReviewId};
use campuscoffee_domain::pos::Pos;
use campuscoffee_domain::review::Review;

/// Application state shared across all axum handlers.
///
/// Generic over the data-service types to avoid dynamic dispatch. `Clone`
/// is implemented manually so the underlying types themselves do not need
/// to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<PD, RD> {
    /// Pos CRUD service.
    pub pos_service: Arc<PosService<PD>>,
    /// Review CRUD service.
    pub review_service: Arc<ReviewService<RD>>,
}

impl<PD, RD> Clone for AppState<PD, RD> {
    fn clone(&self) -> Self {
        Self {
            pos_service: Arc::clone(&self.pos_service),
            review_service: Arc::clone(&self.review_service),
        }
    }
}

impl<PD, RD> AppState<PD, RD>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(pos_service: PosService<PD>, review_service: ReviewService<RD>) -> Self {
        Self {
            pos_service: Arc::new(pos_service),
            review_service: Arc::new(review_service),
        }
    }
}
