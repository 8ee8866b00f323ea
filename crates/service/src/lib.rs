//! Service layer: user storage, registration/login rules and the listing projection.
//! - Keeps business rules independent of the HTTP framework.
//! - Reuses record and validation definitions from the `models` crate.

pub mod errors;
pub mod auth;
pub mod mapper;
pub mod storage;
pub mod user_service;
