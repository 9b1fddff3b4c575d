use async_trait::async_trait;

use super::errors::AuthError;
use super::model::{Credentials, NewAccount, User};

/// Identity backend consulted by the auth store.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError>;
    async fn register(&self, account: &NewAccount) -> Result<User, AuthError>;
}
