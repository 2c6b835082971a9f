//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod pos;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;

use axum::Router;
use axum::routing::get;

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_domain::id::{PosId, ReviewId};
use campuscoffee_domain::pos::Pos;
use campuscoffee_domain::review::Review;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<PD, RD>() -> Router<AppState<PD, RD>>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    Router::new()
        // Points of sale
        .route(
            "/pos",
            get(pos::list::<PD, RD>)
                .post(pos::create::<PD, RD>)
                .delete(pos::clear::<PD, RD>),
        )
        .route(
            "/pos/{id}",
            get(pos::get::<PD, RD>)
                .put(pos::update::<PD, RD>)
                .delete(pos::delete::<PD, RD>),
        )
        // Reviews
        .route(
            "/reviews",
            get(reviews::list::<PD, RD>)
                .post(reviews::create::<PD, RD>)
                .delete(reviews::clear::<PD, RD>),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get::<PD, RD>)
                .put(reviews::update::<PD, RD>)
                .delete(reviews::delete::<PD, RD>),
        )
}
