use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// Validated attributes for a user about to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    /// Verbatim password, or an argon2 PHC string when hashing is enabled.
    pub password: String,
    pub email: String,
    pub phone_number: String,
    pub age: i32,
    pub address: String,
    pub role: String,
}

/// A stored user. Server-side only; listing goes through [`UserDto`].
///
/// Fields are read-only after construction. `updated_at` is set alongside `created_at`
/// and nothing updates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id: Uuid,
    name: String,
    password: String,
    email: String,
    phone_number: String,
    age: i32,
    address: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(user: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: user.name,
            password: user.password,
            email: user.email,
            phone_number: user.phone_number,
            age: user.age,
            address: user.address,
            role: user.role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn password(&self) -> &str { &self.password }
    pub fn email(&self) -> &str { &self.email }
    pub fn phone_number(&self) -> &str { &self.phone_number }
    pub fn age(&self) -> i32 { self.age }
    pub fn address(&self) -> &str { &self.address }
    pub fn role(&self) -> &str { &self.role }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
}

/// Public projection of a user: no password, no role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub age: i32,
    pub address: String,
}

/// Require a present, non-blank string (whitespace-only counts as blank).
pub fn validate_required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ModelError::BlankField(field)),
    }
}

pub fn validate_age(age: i32) -> Result<i32, ModelError> {
    if age <= 0 {
        return Err(ModelError::InvalidAge(age));
    }
    Ok(age)
}
