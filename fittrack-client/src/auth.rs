use async_trait::async_trait;
use fittrack_model::user::{NewUser, User, UserValidationError};
use log::{info, warn};

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    InvalidUser(#[from] UserValidationError),
    #[error("email is already in use")]
    EmailTaken,
    #[error("user not found")]
    UserNotFound,
    #[error("incorrect password")]
    IncorrectPassword,
    #[error("user store failure: {0}")]
    Store(#[from] StoreError),
}

/// Document store holding user records. Password hashing and comparison are
/// the store's business.
#[mockall::automock]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn compare_password(&self, user: &User, password: &str) -> Result<bool, StoreError>;
}

pub async fn sign_up(store: &dyn UserStore, new_user: NewUser) -> Result<User, AuthError> {
    new_user.validate()?;
    if store.find_by_email(new_user.email.trim()).await?.is_some() {
        warn!("Sign-up rejected, {} already registered", new_user.email);
        return Err(AuthError::EmailTaken);
    }
    let user = store.create(new_user).await?;
    info!("Registered user {}", user.email);
    Ok(user)
}

pub async fn sign_in(store: &dyn UserStore, email: &str, password: &str) -> Result<User, AuthError> {
    if email.trim().is_empty() {
        return Err(UserValidationError::MissingField("email").into());
    }
    if password.is_empty() {
        return Err(UserValidationError::MissingField("password").into());
    }
    let user = store
        .find_by_email(email.trim())
        .await?
        .ok_or(AuthError::UserNotFound)?;
    if !store.compare_password(&user, password).await? {
        warn!("Incorrect password for {}", user.email);
        return Err(AuthError::IncorrectPassword);
    }
    info!("User {} signed in", user.email);
    Ok(user)
}
