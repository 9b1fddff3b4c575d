use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use url::Url;
use uuid::Uuid;

use business::domain::auth::errors::AuthError;
use business::domain::auth::model::{Credentials, NewAccount, User};
use business::domain::auth::services::Authenticator;
use business::domain::shared::value_objects::UserId;

pub const DEMO_EMAIL: &str = "demo@test.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Simulated round trip of the identity service.
pub const DEFAULT_AUTH_LATENCY: Duration = Duration::from_millis(1500);

const DEMO_AVATAR: &str = "https://images.unsplash.com/photo-1494790108755-2616b612b9b3?w=150&h=150&fit=crop&crop=face";
const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Offline identity backend: one fixed demo account, and registration that
/// always succeeds after the simulated delay.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    latency: Duration,
}

impl DemoAuthenticator {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn demo_user() -> User {
        User {
            id: UserId::new("1"),
            name: "Sarah Johnson".to_string(),
            email: DEMO_EMAIL.to_string(),
            phone: Some("+44 7700 900123".to_string()),
            avatar: Some(DEMO_AVATAR.to_string()),
            member_since: Utc
                .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_LATENCY)
    }
}

/// Initials avatar for freshly registered users.
pub fn generated_avatar(name: &str) -> Result<Url, AuthError> {
    Url::parse_with_params(
        AVATAR_SERVICE,
        &[
            ("name", name),
            ("background", "4CAF50"),
            ("color", "fff"),
            ("size", "150"),
        ],
    )
    .map_err(|_| AuthError::ServiceUnavailable)
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency).await;

        if credentials.email == DEMO_EMAIL && credentials.password == DEMO_PASSWORD {
            Ok(Self::demo_user())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn register(&self, account: &NewAccount) -> Result<User, AuthError> {
        tokio::time::sleep(self.latency).await;

        let avatar = generated_avatar(&account.name)?;
        Ok(User {
            id: UserId::new(Uuid::new_v4().to_string()),
            name: account.name.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            avatar: Some(avatar.to_string()),
            member_since: Utc::now(),
        })
    }
}
