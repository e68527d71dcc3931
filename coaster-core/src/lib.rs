//! Core types for the coaster collection service.
//!
//! Defines the `Coaster` record, its server-assigned identifier, the id
//! generator, and the seed data the store starts with.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod coaster;
pub mod error;
pub mod id;
pub mod seed;

pub use coaster::Coaster;
pub use error::CoreError;
pub use id::{CoasterId, IdGenerator};
pub use seed::{seed_coasters, SEED_ID};
