//! JSON REST handlers for reviews.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_domain::id::{PosId, ReviewId};
use campuscoffee_domain::pos::Pos;
use campuscoffee_domain::review::Review;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a review.
#[derive(Deserialize)]
pub struct ReviewRequest {
    pub pos_id: i64,
    pub author: String,
    #[serde(default)]
    pub comment: String,
}

impl ReviewRequest {
    fn into_review(self, id: Option<ReviewId>) -> Result<Review, ApiError> {
        let mut builder = Review::builder()
            .pos_id(PosId::from_i64(self.pos_id))
            .author(self.author)
            .comment(self.comment);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        Ok(builder.build()?)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Review>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Review>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Review>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete and clear endpoints.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/reviews`
pub async fn list<PD, RD>(
    State(state): State<AppState<PD, RD>>,
) -> Result<ListResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let all = state.review_service.get_all().await?;
    Ok(ListResponse::Ok(Json(all)))
}

/// `GET /api/reviews/{id}`
pub async fn get<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let review = state
        .review_service
        .get_by_id(ReviewId::from_i64(id))
        .await?;
    Ok(GetResponse::Ok(Json(review)))
}

/// `POST /api/reviews`
///
/// The body carries no identifier, so the service takes the create branch.
pub async fn create<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Json(req): Json<ReviewRequest>,
) -> Result<CreateResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let review = req.into_review(None)?;
    let created = state.review_service.upsert(review).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/reviews/{id}`
///
/// The path identifier is attached to the entity, so the service takes the
/// update branch and confirms existence first.
pub async fn update<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Path(id): Path<i64>,
    Json(req): Json<ReviewRequest>,
) -> Result<GetResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let review = req.into_review(Some(ReviewId::from_i64(id)))?;
    let updated = state.review_service.upsert(review).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/reviews/{id}`
pub async fn delete<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    state
        .review_service
        .delete(ReviewId::from_i64(id))
        .await?;
    Ok(DeleteResponse::NoContent)
}

/// `DELETE /api/reviews`
pub async fn clear<PD, RD>(
    State(state): State<AppState<PD, RD>>,
) -> Result<DeleteResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    state.review_service.clear().await?;
    Ok(DeleteResponse::NoContent)
}
