//! Auth module: domain types, credential handling and the registration/login service.

pub mod credentials;
pub mod domain;
pub mod errors;
pub mod seed;
pub mod service;

pub use domain::{LoginInput, LoginOutcome, RegisterInput};
pub use errors::AuthError;
pub use service::{AuthConfig, AuthService};
