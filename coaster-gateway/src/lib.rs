//! HTTP gateway for the coaster collection service.
//!
//! Serves the `/coasters` collection and item endpoints over an in-memory
//! store, plus a basic-auth protected `/admin` page.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod admin;
pub mod config;
pub mod error;
pub mod random;
pub mod routes;
pub mod store;
