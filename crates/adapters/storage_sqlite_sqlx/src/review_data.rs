//! `SQLite` implementation of the data-service port for reviews.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_domain::error::{CampusCoffeeError, NotFoundError};
use campuscoffee_domain::id::{PosId, ReviewId};
use campuscoffee_domain::model::DomainModel;
use campuscoffee_domain::review::Review;
use campuscoffee_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Review`].
struct Wrapper(Review);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let pos_id: i64 = row.try_get("pos_id")?;
        let author: String = row.try_get("author")?;
        let comment: String = row.try_get("comment")?;
        let created_at: Timestamp = row.try_get("created_at")?;

        Ok(Self(Review {
            id: Some(ReviewId::from_i64(id)),
            pos_id: PosId::from_i64(pos_id),
            author,
            comment,
            created_at,
        }))
    }
}

const CLEAR: &str = "DELETE FROM reviews";
const SELECT_ALL: &str = "SELECT * FROM reviews ORDER BY id";
const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const INSERT: &str =
    "INSERT INTO reviews (pos_id, author, comment, created_at) VALUES (?, ?, ?, ?)";
const UPDATE: &str =
    "UPDATE reviews SET pos_id = ?, author = ?, comment = ?, created_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";

/// `SQLite`-backed data service for reviews.
pub struct SqliteReviewDataService {
    pool: SqlitePool,
}

impl SqliteReviewDataService {
    /// Create a new data service using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn missing(id: ReviewId) -> CampusCoffeeError {
        NotFoundError {
            entity: Review::NAME,
            id: id.to_string(),
        }
        .into()
    }
}

impl CrudDataService<Review, ReviewId> for SqliteReviewDataService {
    fn clear(&self) -> impl Future<Output = Result<(), CampusCoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(CLEAR)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, CampusCoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(
        &self,
        id: ReviewId,
    ) -> impl Future<Output = Result<Review, CampusCoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            match row {
                Some(wrapper) => Ok(wrapper.0),
                None => Err(Self::missing(id)),
            }
        }
    }

    fn upsert(
        &self,
        mut item: Review,
    ) -> impl Future<Output = Result<Review, CampusCoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            match item.id {
                None => {
                    let result = sqlx::query(INSERT)
                        .bind(item.pos_id.as_i64())
                        .bind(&item.author)
                        .bind(&item.comment)
                        .bind(item.created_at)
                        .execute(&pool)
                        .await
                        .map_err(StorageError::from)?;

                    item.set_id(ReviewId::from_i64(result.last_insert_rowid()));
                    Ok(item)
                }
                Some(id) => {
                    let result = sqlx::query(UPDATE)
                        .bind(item.pos_id.as_i64())
                        .bind(&item.author)
                        .bind(&item.comment)
                        .bind(item.created_at)
                        .bind(id.as_i64())
                        .execute(&pool)
                        .await
                        .map_err(StorageError::from)?;

                    if result.rows_affected() == 0 {
                        return Err(Self::missing(id));
                    }
                    Ok(item)
                }
            }
        }
    }

    fn delete(&self, id: ReviewId) -> impl Future<Output = Result<(), CampusCoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(Self::missing(id));
            }
            Ok(())
        }
    }
}
