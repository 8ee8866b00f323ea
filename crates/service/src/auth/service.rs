use std::sync::Arc;

use chrono::Utc;
use configs::PasswordStorage;
use models::user::{validate_age, validate_required, NewUser, UserRecord};
use tracing::{debug, info, instrument};

use super::credentials;
use super::domain::{LoginInput, LoginOutcome, RegisterInput};
use super::errors::AuthError;
use crate::storage::UserStore;

/// Auth service configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthConfig {
    pub password_storage: PasswordStorage,
}

/// Auth business service independent of web framework
pub struct AuthService<S: UserStore + ?Sized> {
    store: Arc<S>,
    cfg: AuthConfig,
}

impl<S: UserStore + ?Sized> AuthService<S> {
    pub fn new(store: Arc<S>, cfg: AuthConfig) -> Self { Self { store, cfg } }

    pub fn store(&self) -> &Arc<S> { &self.store }

    /// Register a user, reporting why a rejected request was rejected.
    ///
    /// Nothing is written unless every check passes.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, AuthError, AuthService, RegisterInput};
    /// use service::storage::InMemoryUserStore;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(InMemoryUserStore::new()), AuthConfig::default());
    /// let input = RegisterInput {
    ///     name: Some("A".into()),
    ///     password: Some("p".into()),
    ///     email: Some("a@x.com".into()),
    ///     phone_number: Some("1".into()),
    ///     age: Some(30),
    ///     address: Some("addr".into()),
    ///     role: Some("User".into()),
    /// };
    /// let user = tokio_test::block_on(svc.register_detailed(input.clone())).unwrap();
    /// assert_eq!(user.email(), "a@x.com");
    /// let again = tokio_test::block_on(svc.register_detailed(input));
    /// assert_eq!(again.unwrap_err(), AuthError::DuplicateEmail);
    /// ```
    #[instrument(skip(self, input), fields(email = input.email.as_deref().unwrap_or("")))]
    pub async fn register_detailed(&self, input: RegisterInput) -> Result<UserRecord, AuthError> {
        let name = validate_required("name", input.name.as_deref())?;
        let password = validate_required("password", input.password.as_deref())?;
        let email = validate_required("email", input.email.as_deref())?;
        let phone_number = validate_required("phoneNumber", input.phone_number.as_deref())?;
        let age = validate_age(input.age.unwrap_or(0))?;
        let address = validate_required("address", input.address.as_deref())?;
        let role = validate_required("role", input.role.as_deref())?;

        // Early exit before paying for a hash; append_unique re-checks under the write guard.
        if self.store.find_by_email(email).await.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let new_user = NewUser {
            name: name.to_string(),
            password: credentials::seal(self.cfg.password_storage, password)?,
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            age,
            address: address.to_string(),
            role: role.to_string(),
        };
        let record = UserRecord::new(new_user, Utc::now());
        self.store.append_unique(record.clone()).await?;
        info!(user_id = %record.id(), email = %record.email(), "user_registered");
        Ok(record)
    }

    /// Boolean registration contract: `true` on exactly one append, `false` otherwise.
    pub async fn register(&self, input: RegisterInput) -> bool {
        match self.register_detailed(input).await {
            Ok(_) => true,
            Err(e) => {
                debug!(code = e.code(), reason = %e, "registration_rejected");
                false
            }
        }
    }

    /// Find the user whose email and password both match exactly.
    ///
    /// Unknown email and wrong password are the same error.
    #[instrument(skip(self, input), fields(email = input.email.as_deref().unwrap_or("")))]
    pub async fn authenticate(&self, input: LoginInput) -> Result<UserRecord, AuthError> {
        let (Some(email), Some(password)) = (input.email.as_deref(), input.password.as_deref()) else {
            return Err(AuthError::InvalidCredentials);
        };
        self.store
            .find_all_by_email(email)
            .await
            .into_iter()
            .find(|u| credentials::matches(self.cfg.password_storage, u.password(), password))
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Login contract reduced to success/failure.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthConfig, AuthService, LoginInput, LoginOutcome};
    /// use service::storage::InMemoryUserStore;
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(InMemoryUserStore::new()), AuthConfig::default());
    /// let input = LoginInput { email: Some("nobody@x.com".into()), password: Some("pw".into()) };
    /// assert_eq!(tokio_test::block_on(svc.login(input)), LoginOutcome::Failed);
    /// ```
    pub async fn login(&self, input: LoginInput) -> LoginOutcome {
        match self.authenticate(input).await {
            Ok(user) => {
                debug!(user_id = %user.id(), "login_succeeded");
                LoginOutcome::Success
            }
            Err(e) => {
                debug!(code = e.code(), "login_failed");
                LoginOutcome::Failed
            }
        }
    }
}
