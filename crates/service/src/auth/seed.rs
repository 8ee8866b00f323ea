//! Demo users for manual testing.

use tracing::{info, warn};

use super::domain::RegisterInput;
use super::service::AuthService;
use crate::storage::UserStore;

fn demo_user(name: &str, password: &str, email: &str, role: &str) -> RegisterInput {
    RegisterInput {
        name: Some(name.into()),
        password: Some(password.into()),
        email: Some(email.into()),
        phone_number: Some("1234567890".into()),
        age: Some(20),
        address: Some("address".into()),
        role: Some(role.into()),
    }
}

pub fn demo_users() -> Vec<RegisterInput> {
    vec![
        demo_user("admin", "admin", "email@gmail.com", "admin"),
        demo_user("user", "user", "a", "user"),
    ]
}

/// Register the demo users through the normal path; returns how many were added.
pub async fn seed_demo_users<S: UserStore + ?Sized>(svc: &AuthService<S>) -> usize {
    let mut added = 0;
    for input in demo_users() {
        let email = input.email.clone().unwrap_or_default();
        match svc.register_detailed(input).await {
            Ok(_) => added += 1,
            Err(e) => warn!(%email, error = %e, "demo user not seeded"),
        }
    }
    info!(added, "demo users seeded");
    added
}
