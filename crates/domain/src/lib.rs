//! # campuscoffee-domain
//!
//! Pure domain model for the campuscoffee campus coffee directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the [`model::DomainModel`] capability contract every persistable
//!   entity implements (identifier accessor, storage-assigned keys)
//! - Define **points of sale** (vending machines, coffee shops, bakeries on
//!   campus) and **reviews** written about them
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod model;
pub mod time;

pub mod pos;
pub mod review;
