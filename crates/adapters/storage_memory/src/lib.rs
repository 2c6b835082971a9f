//! # campuscoffee-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`CrudDataService`] port with a mutex-guarded map
//! - Assign sequential identifiers on create, the way a database would
//! - Enforce an optional single-field uniqueness constraint
//!
//! Used by service and router tests, and as the `memory` storage backend of
//! the daemon for storage-free deployments.
//!
//! ## Dependency rule
//! Depends on `campuscoffee-app` (for the port trait) and
//! `campuscoffee-domain` (for domain types). The `app` and `domain` crates
//! must never reference this adapter.

use std::collections::BTreeMap;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use campuscoffee_app::ports::CrudDataService;
use campuscoffee_domain::error::{CampusCoffeeError, DuplicateError, NotFoundError};
use campuscoffee_domain::model::DomainModel;

/// Single-field uniqueness constraint checked on every upsert.
struct UniqueConstraint<T> {
    field: &'static str,
    key: fn(&T) -> String,
}

/// Map-backed implementation of [`CrudDataService`].
///
/// Rows are keyed by the raw `i64` identifier, so `get_all` iterates in id
/// order. The id sequence starts at 1 and always stays above every
/// explicitly stored key.
pub struct InMemoryDataService<T, Id> {
    rows: Mutex<BTreeMap<i64, T>>,
    next_id: AtomicI64,
    unique: Option<UniqueConstraint<T>>,
    _id: PhantomData<fn() -> Id>,
}

impl<T, Id> InMemoryDataService<T, Id> {
    /// Create an empty store without uniqueness constraints.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            unique: None,
            _id: PhantomData,
        }
    }

    /// Create an empty store that rejects two rows sharing the value
    /// produced by `key`, reporting the collision under `field`.
    #[must_use]
    pub fn with_unique(field: &'static str, key: fn(&T) -> String) -> Self {
        Self {
            unique: Some(UniqueConstraint { field, key }),
            ..Self::new()
        }
    }
}

impl<T, Id> Default for InMemoryDataService<T, Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Id> InMemoryDataService<T, Id>
where
    T: DomainModel<Id> + Clone,
    Id: From<i64> + Into<i64> + Copy,
{
    fn missing(key: i64) -> CampusCoffeeError {
        NotFoundError {
            entity: T::NAME,
            id: key.to_string(),
        }
        .into()
    }

    fn try_upsert(&self, rows: &mut BTreeMap<i64, T>, mut item: T) -> Result<T, CampusCoffeeError> {
        if let Some(unique) = &self.unique {
            let value = (unique.key)(&item);
            let own_key: Option<i64> = item.id().map(Into::into);
            let clash = rows
                .iter()
                .any(|(key, row)| Some(*key) != own_key && (unique.key)(row) == value);
            if clash {
                return Err(DuplicateError {
                    entity: T::NAME,
                    field: unique.field,
                    value,
                }
                .into());
            }
        }

        let key = match item.id() {
            Some(id) => {
                let key: i64 = id.into();
                // keep the sequence above explicitly stored keys
                self.next_id.fetch_max(key + 1, Ordering::Relaxed);
                key
            }
            None => {
                let key = self.next_id.fetch_add(1, Ordering::Relaxed);
                item.set_id(Id::from(key));
                key
            }
        };
        rows.insert(key, item.clone());
        Ok(item)
    }
}

impl<T, Id> CrudDataService<T, Id> for InMemoryDataService<T, Id>
where
    T: DomainModel<Id> + Clone + Send,
    Id: From<i64> + Into<i64> + Copy,
{
    fn clear(&self) -> impl Future<Output = Result<(), CampusCoffeeError>> + Send {
        self.rows.lock().unwrap().clear();
        async { Ok(()) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<T>, CampusCoffeeError>> + Send {
        let rows = self.rows.lock().unwrap();
        let result: Vec<T> = rows.values().cloned().collect();
        async move { Ok(result) }
    }

    fn get_by_id(&self, id: Id) -> impl Future<Output = Result<T, CampusCoffeeError>> + Send {
        let key: i64 = id.into();
        let rows = self.rows.lock().unwrap();
        let result = rows.get(&key).cloned().ok_or_else(|| Self::missing(key));
        async move { result }
    }

    fn upsert(&self, item: T) -> impl Future<Output = Result<T, CampusCoffeeError>> + Send {
        let mut rows = self.rows.lock().unwrap();
        let result = self.try_upsert(&mut rows, item);
        async move { result }
    }

    fn delete(&self, id: Id) -> impl Future<Output = Result<(), CampusCoffeeError>> + Send {
        let key: i64 = id.into();
        let mut rows = self.rows.lock().unwrap();
        let result = match rows.remove(&key) {
            Some(_) => Ok(()),
            None => Err(Self::missing(key)),
        };
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campuscoffee_domain::id::PosId;
    use campuscoffee_domain::pos::{Campus, Pos, PosType};

    fn store() -> InMemoryDataService<Pos, PosId> {
        InMemoryDataService::with_unique("name", |pos: &Pos| pos.name.clone())
    }

    fn pos(name: &str) -> Pos {
        Pos::builder()
            .name(name)
            .campus(Campus::Altstadt)
            .pos_type(PosType::CoffeeShop)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_on_create() {
        let store = store();

        let first = store.upsert(pos("Mensa Marstall")).await.unwrap();
        let second = store.upsert(pos("Cafe Botanik")).await.unwrap();

        assert_eq!(first.id, Some(PosId::from_i64(1)));
        assert_eq!(second.id, Some(PosId::from_i64(2)));
    }

    #[tokio::test]
    async fn should_fetch_stored_entity_by_id() {
        let store = store();
        let created = store.upsert(pos("Mensa Marstall")).await.unwrap();

        let fetched = store.get_by_id(created.id.unwrap()).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let store = store();

        let result = store.get_by_id(PosId::from_i64(42)).await;

        let Err(CampusCoffeeError::NotFound(err)) = result else {
            panic!("expected NotFound");
        };
        assert_eq!(err.to_string(), "Pos with id '42' could not be found.");
    }

    #[tokio::test]
    async fn should_list_all_in_id_order() {
        let store = store();
        store.upsert(pos("Backhaus")).await.unwrap();
        store.upsert(pos("Automat INF 306")).await.unwrap();

        let all = store.get_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Backhaus");
        assert_eq!(all[1].name, "Automat INF 306");
    }

    #[tokio::test]
    async fn should_replace_row_when_upserting_with_id() {
        let store = store();
        let mut created = store.upsert(pos("Backhaus")).await.unwrap();

        created.description = "Now with oat milk".to_string();
        let updated = store.upsert(created.clone()).await.unwrap();

        assert_eq!(updated, created);
        assert_eq!(store.get_all().await.unwrap().len(), 1);
        let fetched = store.get_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched.description, "Now with oat milk");
    }

    #[tokio::test]
    async fn should_reject_duplicate_unique_field() {
        let store = store();
        store.upsert(pos("Mensa Marstall")).await.unwrap();

        let result = store.upsert(pos("Mensa Marstall")).await;

        let Err(CampusCoffeeError::Duplicate(err)) = result else {
            panic!("expected Duplicate");
        };
        assert_eq!(
            err.to_string(),
            "Pos with name 'Mensa Marstall' already exists."
        );
    }

    #[tokio::test]
    async fn should_not_clash_with_own_row_when_updating() {
        let store = store();
        let mut created = store.upsert(pos("Mensa Marstall")).await.unwrap();

        created.description = "Unchanged name".to_string();
        let result = store.upsert(created).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_keep_sequence_above_explicit_keys() {
        let store = store();
        let mut seeded = pos("Backhaus");
        seeded.id = Some(PosId::from_i64(10));
        store.upsert(seeded).await.unwrap();

        let created = store.upsert(pos("Cafe Botanik")).await.unwrap();

        assert_eq!(created.id, Some(PosId::from_i64(11)));
    }

    #[tokio::test]
    async fn should_delete_stored_entity() {
        let store = store();
        let created = store.upsert(pos("Backhaus")).await.unwrap();

        store.delete(created.id.unwrap()).await.unwrap();

        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_unknown_id() {
        let store = store();

        let result = store.delete(PosId::from_i64(7)).await;

        assert!(matches!(result, Err(CampusCoffeeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_remove_everything_on_clear() {
        let store = store();
        store.upsert(pos("Backhaus")).await.unwrap();
        store.upsert(pos("Cafe Botanik")).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.get_all().await.unwrap().is_empty());
    }
}
