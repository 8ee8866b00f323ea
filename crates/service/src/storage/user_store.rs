use async_trait::async_trait;
use models::user::UserRecord;
use tokio::sync::RwLock;

use crate::errors::StoreError;

/// Ordered, append-only collection of users.
///
/// Lookups scan in insertion order and compare emails exactly (case-sensitive, no trimming).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Add a record at the end. Callers are responsible for email uniqueness;
    /// registration goes through [`UserStore::append_unique`] instead.
    async fn append(&self, record: UserRecord);

    /// Check-then-append under a single exclusive guard.
    async fn append_unique(&self, record: UserRecord) -> Result<(), StoreError>;

    /// First record whose email equals `email`.
    async fn find_by_email(&self, email: &str) -> Option<UserRecord>;

    /// Every record whose email equals `email`, in insertion order.
    async fn find_all_by_email(&self, email: &str) -> Vec<UserRecord>;

    /// Snapshot of all records in insertion order.
    async fn all(&self) -> Vec<UserRecord>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store. Records are taken as-is, duplicates included.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self { users: RwLock::new(records) }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn append(&self, record: UserRecord) {
        self.users.write().await.push(record);
    }

    async fn append_unique(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email() == record.email()) {
            return Err(StoreError::DuplicateEmail(record.email().to_string()));
        }
        users.push(record);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let users = self.users.read().await;
        users.iter().find(|u| u.email() == email).cloned()
    }

    async fn find_all_by_email(&self, email: &str) -> Vec<UserRecord> {
        let users = self.users.read().await;
        users.iter().filter(|u| u.email() == email).cloned().collect()
    }

    async fn all(&self) -> Vec<UserRecord> {
        self.users.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}
