//! # campuscoffee-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** adapters must implement (driven/outbound):
//!   - [`ports::CrudDataService`]: storage-agnostic CRUD for one entity type
//! - Define **driving/inbound ports** as use-case structs:
//!   - [`services::CrudService`]: the uniform CRUD surface callers talk to,
//!     delegating every operation to the injected data service
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `campuscoffee-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
