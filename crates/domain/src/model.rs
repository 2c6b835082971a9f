//! Capability contract for persistable domain entities.

/// Contract every entity persisted through the CRUD stack implements.
///
/// An entity starts life without an identifier; the storage layer assigns
/// one on first persist. `id()` returning `None` therefore means the entity
/// has never been confirmed to exist in storage, while `Some(_)` marks it as
/// a candidate for update.
pub trait DomainModel<Id> {
    /// Entity name used in error messages such as
    /// [`NotFoundError`](crate::error::NotFoundError) and
    /// [`DuplicateError`](crate::error::DuplicateError).
    const NAME: &'static str;

    /// The identifier, if the entity has been persisted.
    fn id(&self) -> Option<Id>;

    /// Attach the identifier assigned by the storage layer.
    fn set_id(&mut self, id: Id);
}
