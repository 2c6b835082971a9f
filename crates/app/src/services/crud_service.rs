//! Generic CRUD service delegating to an injected data-service port.

use std::marker::PhantomData;

use campuscoffee_domain::error::CampusCoffeeError;
use campuscoffee_domain::model::DomainModel;

use crate::ports::CrudDataService;

/// Uniform, storage-agnostic CRUD surface for one entity type.
///
/// Every call is routed to the injected [`CrudDataService`]. The only logic
/// this service adds is the create/update decision inside [`upsert`]: an
/// entity without an identifier is a create; an entity with one is an update
/// whose existence is confirmed first. The service holds no state of its own
/// and performs no retries, caching, or error translation.
///
/// [`upsert`]: CrudService::upsert
pub struct CrudService<D, T, Id> {
    data: D,
    _model: PhantomData<fn() -> (T, Id)>,
}

impl<D, T, Id> CrudService<D, T, Id>
where
    D: CrudDataService<T, Id>,
    T: DomainModel<Id>,
{
    /// Create a new service backed by the given data service.
    pub fn new(data: D) -> Self {
        Self {
            data,
            _model: PhantomData,
        }
    }

    /// Remove every stored entity of this type.
    ///
    /// # Errors
    ///
    /// Returns whatever the data service raises, unchanged.
    pub async fn clear(&self) -> Result<(), CampusCoffeeError> {
        self.data.clear().await
    }

    /// Fetch all stored entities, exactly as the data service returns them.
    ///
    /// # Errors
    ///
    /// Returns whatever the data service raises, unchanged.
    pub async fn get_all(&self) -> Result<Vec<T>, CampusCoffeeError> {
        self.data.get_all().await
    }

    /// Fetch one entity by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CampusCoffeeError::NotFound`] from the data service when no
    /// entity with `id` exists.
    pub async fn get_by_id(&self, id: Id) -> Result<T, CampusCoffeeError> {
        self.data.get_by_id(id).await
    }

    /// Insert or update an entity, branching on identifier presence.
    ///
    /// An entity without an identifier is a create and is passed straight
    /// through. An entity with an identifier is an update: its existence is
    /// confirmed via `get_by_id` first, so a stale identifier fails before
    /// any write happens.
    ///
    /// # Errors
    ///
    /// Returns [`CampusCoffeeError::NotFound`] when the update target does
    /// not exist, [`CampusCoffeeError::Duplicate`] when the data service
    /// reports a uniqueness violation, or any other storage failure,
    /// unchanged.
    pub async fn upsert(&self, item: T) -> Result<T, CampusCoffeeError> {
        if let Some(id) = item.id() {
            self.data.get_by_id(id).await?;
        }
        self.data.upsert(item).await
    }

    /// Delete one entity by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CampusCoffeeError::NotFound`] from the data service when no
    /// entity with `id` exists.
    pub async fn delete(&self, id: Id) -> Result<(), CampusCoffeeError> {
        self.data.delete(id).await
    }
}
