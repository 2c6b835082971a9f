//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_domain::id::{PosId, ReviewId};
use campuscoffee_domain::pos::Pos;
use campuscoffee_domain::review::Review;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the JSON API under `/api` and a health check at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PD, RD>(state: AppState<PD, RD>) -> Router
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
