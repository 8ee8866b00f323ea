//! Storage abstractions for the service layer.
//!
//! Users live in process memory only; state is lost on restart.

pub mod user_store;

pub use user_store::{InMemoryUserStore, UserStore};
