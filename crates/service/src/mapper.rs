use models::user::{UserDto, UserRecord};

/// One-way projection from a source type into a response shape.
pub trait Mapper<Src, Dst>: Send + Sync {
    fn configure(&self, source: &Src) -> Dst;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UserMapper;

impl Mapper<UserRecord, UserDto> for UserMapper {
    fn configure(&self, source: &UserRecord) -> UserDto {
        UserDto {
            id: source.id(),
            name: source.name().to_string(),
            email: source.email().to_string(),
            phone_number: source.phone_number().to_string(),
            age: source.age(),
            address: source.address().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use models::user::NewUser;

    #[test]
    fn projects_public_fields_only() {
        let rec = UserRecord::new(
            NewUser {
                name: "A".into(),
                password: "secret".into(),
                email: "a@x.com".into(),
                phone_number: "1".into(),
                age: 30,
                address: "addr".into(),
                role: "Admin".into(),
            },
            Utc::now(),
        );
        let dto = UserMapper.configure(&rec);
        assert_eq!(dto.id, rec.id());
        assert_eq!(dto.name, "A");
        assert_eq!(dto.email, "a@x.com");
        assert_eq!(dto.phone_number, "1");
        assert_eq!(dto.age, 30);
        assert_eq!(dto.address, "addr");

        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("Admin"));
    }
}
