//! JSON REST handlers for points of sale.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_domain::id::{PosId, ReviewId};
use campuscoffee_domain::pos::{Campus, Pos, PosType};
use campuscoffee_domain::review::Review;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a point of sale.
#[derive(Deserialize)]
pub struct PosRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub campus: Campus,
    pub pos_type: PosType,
}

impl PosRequest {
    fn into_pos(self, id: Option<PosId>) -> Result<Pos, ApiError> {
        let mut builder = Pos::builder()
            .name(self.name)
            .description(self.description)
            .campus(self.campus)
            .pos_type(self.pos_type);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        Ok(builder.build()?)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Pos>>),
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
    Ok(Json<Pos>),
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
    Created(Json<Pos>),
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

/// `GET /api/pos`
pub async fn list<PD, RD>(
    State(state): State<AppState<PD, RD>>,
) -> Result<ListResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let all = state.pos_service.get_all().await?;
    Ok(ListResponse::Ok(Json(all)))
}

/// `GET /api/pos/{id}`
pub async fn get<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Path(id): Path<i64>,
) -> Result<GetResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let pos = state.pos_service.get_by_id(PosId::from_i64(id)).await?;
    Ok(GetResponse::Ok(Json(pos)))
}

/// `POST /api/pos`
///
/// The body carries no identifier, so the service takes the create branch.
pub async fn create<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Json(req): Json<PosRequest>,
) -> Result<CreateResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let pos = req.into_pos(None)?;
    let created = state.pos_service.upsert(pos).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/pos/{id}`
///
/// The path identifier is attached to the entity, so the service takes the
/// update branch and confirms existence first.
pub async fn update<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Path(id): Path<i64>,
    Json(req): Json<PosRequest>,
) -> Result<GetResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    let pos = req.into_pos(Some(PosId::from_i64(id)))?;
    let updated = state.pos_service.upsert(pos).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/pos/{id}`
pub async fn delete<PD, RD>(
    State(state): State<AppState<PD, RD>>,
    Path(id): Path<i64>,
) -> Result<DeleteResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    state.pos_service.delete(PosId::from_i64(id)).await?;
    Ok(DeleteResponse::NoContent)
}

/// `DELETE /api/pos`
pub async fn clear<PD, RD>(
    State(state): State<AppState<PD, RD>>,
) -> Result<DeleteResponse, ApiError>
where
    PD: CrudDataService<Pos, PosId> + Send + Sync + 'static,
    RD: CrudDataService<Review, ReviewId> + Send + Sync + 'static,
{
    state.pos_service.clear().await?;
    Ok(DeleteResponse::NoContent)
}
