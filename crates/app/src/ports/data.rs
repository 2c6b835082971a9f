//! Data-service port: storage-agnostic persistence for one entity type.

use std::future::Future;

use campuscoffee_domain::error::CampusCoffeeError;

/// Outbound port for persisting entities of type `T` keyed by `Id`.
///
/// Implementations own all storage semantics: identifier assignment on
/// create, existence checks, and uniqueness enforcement. The service layer
/// forwards whatever an implementation raises without translating it.
pub trait CrudDataService<T, Id> {
    /// Remove every stored entity of this type.
    fn clear(&self) -> impl Future<Output = Result<(), CampusCoffeeError>> + Send;

    /// Fetch all stored entities, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<T>, CampusCoffeeError>> + Send;

    /// Fetch one entity by its identifier.
    ///
    /// Fails with [`CampusCoffeeError::NotFound`] when no entity with `id`
    /// exists.
    fn get_by_id(&self, id: Id) -> impl Future<Output = Result<T, CampusCoffeeError>> + Send;

    /// Insert or update an entity and return the stored representation.
    ///
    /// On insert the returned entity carries the newly assigned identifier.
    /// Fails with [`CampusCoffeeError::Duplicate`] when a uniqueness
    /// constraint is violated.
    fn upsert(&self, item: T) -> impl Future<Output = Result<T, CampusCoffeeError>> + Send;

    /// Delete one entity by its identifier.
    ///
    /// Fails with [`CampusCoffeeError::NotFound`] when no entity with `id`
    /// exists.
    fn delete(&self, id: Id) -> impl Future<Output = Result<(), CampusCoffeeError>> + Send;
}
