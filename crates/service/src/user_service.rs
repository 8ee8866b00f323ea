use models::user::{UserDto, UserRecord};

use crate::mapper::Mapper;
use crate::storage::UserStore;

/// List every user as a public projection, in insertion order.
pub async fn list_users<S, M>(store: &S, mapper: &M) -> Vec<UserDto>
where
    S: UserStore + ?Sized,
    M: Mapper<UserRecord, UserDto> + ?Sized,
{
    store.all().await.iter().map(|u| mapper.configure(u)).collect()
}
