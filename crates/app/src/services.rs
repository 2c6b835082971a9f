//! Application services: use-case implementations.
//!
//! Each service accepts its port implementation via a generic parameter
//! (constructor injection), keeping this layer decoupled from concrete
//! adapters.

pub mod crud_service;

pub use crud_service::CrudService;

use campuscoffee_domain::id::{PosId, ReviewId};
use campuscoffee_domain::pos::Pos;
use campuscoffee_domain::review::Review;

/// CRUD service for points of sale.
pub type PosService<D> = CrudService<D, Pos, PosId>;

/// CRUD service for reviews.
pub type ReviewService<D> = CrudService<D, Review, ReviewId>;
