//! `SQLite` implementation of the data-service port for points of sale.

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_domain::error::{CampusCoffeeError, NotFoundError};
use campuscoffee_domain::id::PosId;
use campuscoffee_domain::model::DomainModel;
use campuscoffee_domain::pos::{Campus, Pos, PosType};
use campuscoffee_domain::time::Timestamp;

use crate::error::{StorageError, map_write_err};

/// Wrapper for converting database rows into domain [`Pos`].
struct Wrapper(Pos);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: String = row.try_get("description")?;
        let campus: String = row.try_get("campus")?;
        let pos_type: String = row.try_get("pos_type")?;
        let created_at: Timestamp = row.try_get("created_at")?;

        let campus = Campus::from_str(&campus).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let pos_type =
            PosType::from_str(&pos_type).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Pos {
            id: Some(PosId::from_i64(id)),
            name,
            description,
            campus,
            pos_type,
            created_at,
        }))
    }
}

const CLEAR: &str = "DELETE FROM pos";
const SELECT_ALL: &str = "SELECT * FROM pos ORDER BY id";
const SELECT_BY_ID: &str = "SELECT * FROM pos WHERE id = ?";
const INSERT: &str =
    "INSERT INTO pos (name, description, campus, pos_type, created_at) VALUES (?, ?, ?, ?, ?)";
const UPDATE: &str =
    "UPDATE pos SET name = ?, description = ?, campus = ?, pos_type = ?, created_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM pos WHERE id = ?";

/// `SQLite`-backed data service for points of sale.
pub struct SqlitePosDataService {
    pool: SqlitePool,
}

impl SqlitePosDataService {
    /// Create a new data service using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn missing(id: PosId) -> CampusCoffeeError {
        NotFoundError {
            entity: Pos::NAME,
            id: id.to_string(),
        }
        .into()
    }
}

impl CrudDataService<Pos, PosId> for SqlitePosDataService {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Pos>, CampusCoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn get_by_id(&self, id: PosId) -> impl Future<Output = Result<Pos, CampusCoffeeError>> + Send {
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

    fn upsert(&self, mut item: Pos) -> impl Future<Output = Result<Pos, CampusCoffeeError>> + Send {
        let pool = self.pool.clone();
        async move {
            match item.id {
                None => {
                    let result = sqlx::query(INSERT)
                        .bind(&item.name)
                        .bind(&item.description)
                        .bind(item.campus.as_str())
                        .bind(item.pos_type.as_str())
                        .bind(item.created_at)
                        .execute(&pool)
                        .await
                        .map_err(|err| map_write_err(Pos::NAME, "name", &item.name, err))?;

                    item.set_id(PosId::from_i64(result.last_insert_rowid()));
                    Ok(item)
                }
                Some(id) => {
                    let result = sqlx::query(UPDATE)
                        .bind(&item.name)
                        .bind(&item.description)
                        .bind(item.campus.as_str())
                        .bind(item.pos_type.as_str())
                        .bind(item.created_at)
                        .bind(id.as_i64())
                        .execute(&pool)
                        .await
                        .map_err(|err| map_write_err(Pos::NAME, "name", &item.name, err))?;

                    if result.rows_affected() == 0 {
                        return Err(Self::missing(id));
                    }
                    Ok(item)
                }
            }
        }
    }

    fn delete(&self, id: PosId) -> impl Future<Output = Result<(), CampusCoffeeError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqlitePosDataService {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqlitePosDataService::new(db.pool().clone())
    }

    fn test_pos(name: &str) -> Pos {
        Pos::builder()
            .name(name)
            .description("Coffee on campus")
            .campus(Campus::Altstadt)
            .pos_type(PosType::CoffeeShop)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_id_and_roundtrip_fields_on_create() {
        let store = setup().await;

        let created = store.upsert(test_pos("Mensa Marstall")).await.unwrap();
        let id = created.id.unwrap();

        let fetched = store.get_by_id(id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Mensa Marstall");
        assert_eq!(fetched.campus, Campus::Altstadt);
        assert_eq!(fetched.pos_type, PosType::CoffeeShop);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let store = setup().await;

        let result = store.get_by_id(PosId::from_i64(42)).await;

        let Err(CampusCoffeeError::NotFound(err)) = result else {
            panic!("expected NotFound");
        };
        assert_eq!(err.to_string(), "Pos with id '42' could not be found.");
    }

    #[tokio::test]
    async fn should_list_all_in_id_order() {
        let store = setup().await;
        store.upsert(test_pos("Backhaus")).await.unwrap();
        store.upsert(test_pos("Automat INF 306")).await.unwrap();

        let all = store.get_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Backhaus");
        assert_eq!(all[1].name, "Automat INF 306");
    }

    #[tokio::test]
    async fn should_persist_changes_on_update() {
        let store = setup().await;
        let mut created = store.upsert(test_pos("Backhaus")).await.unwrap();

        created.description = "Now with oat milk".to_string();
        store.upsert(created.clone()).await.unwrap();

        let fetched = store.get_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched.description, "Now with oat milk");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_id() {
        let store = setup().await;
        let mut pos = test_pos("Backhaus");
        pos.id = Some(PosId::from_i64(42));

        let result = store.upsert(pos).await;

        assert!(matches!(result, Err(CampusCoffeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_duplicate_name() {
        let store = setup().await;
        store.upsert(test_pos("Mensa Marstall")).await.unwrap();

        let result = store.upsert(test_pos("Mensa Marstall")).await;

        let Err(CampusCoffeeError::Duplicate(err)) = result else {
            panic!("expected Duplicate");
        };
        assert_eq!(
            err.to_string(),
            "Pos with name 'Mensa Marstall' already exists."
        );
    }

    #[tokio::test]
    async fn should_delete_stored_pos() {
        let store = setup().await;
        let created = store.upsert(test_pos("Backhaus")).await.unwrap();
        let id = created.id.unwrap();

        store.delete(id).await.unwrap();

        let result = store.get_by_id(id).await;
        assert!(matches!(result, Err(CampusCoffeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_id() {
        let store = setup().await;

        let result = store.delete(PosId::from_i64(7)).await;

        assert!(matches!(result, Err(CampusCoffeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_remove_everything_on_clear() {
        let store = setup().await;
        store.upsert(test_pos("Backhaus")).await.unwrap();
        store.upsert(test_pos("Cafe Botanik")).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.get_all().await.unwrap().is_empty());
    }
}
