use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use crate::application::cart::store::CartStore;
use crate::application::shared::observable::Observable;
use crate::domain::auth::model::{Credentials, NewAccount, ProfileUpdate, RegistrationForm, User};
use crate::domain::auth::services::Authenticator;
use crate::domain::logger::Logger;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_logged_in: bool,
    pub is_loading: bool,
}

/// Session of the signed-in shopper.
///
/// Sign-in and registration resolve to a plain `bool`; the reason for a
/// failure only reaches the log. Signing out also empties the cart.
pub struct AuthStore {
    state: Observable<AuthState>,
    authenticator: Arc<dyn Authenticator>,
    cart: Arc<CartStore>,
    logger: Arc<dyn Logger>,
}

impl AuthStore {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        cart: Arc<CartStore>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            state: Observable::new(AuthState::default()),
            authenticator,
            cart,
            logger,
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read(|s| s.user.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read(|s| s.is_logged_in)
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.set_loading(true);
        self.logger.info(&format!("Signing in: {}", email));

        let credentials = Credentials::new(email, password);
        match self.authenticator.sign_in(&credentials).await {
            Ok(user) => {
                self.logger.info(&format!("Signed in as user {}", user.id));
                self.start_session(user);
                true
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Sign in failed for {}: {}", email, e));
                self.set_loading(false);
                false
            }
        }
    }

    pub async fn register(&self, form: RegistrationForm) -> bool {
        let account = match NewAccount::new(form) {
            Ok(account) => account,
            Err(e) => {
                self.logger.warn(&format!("Registration rejected: {}", e));
                return false;
            }
        };

        self.set_loading(true);
        self.logger
            .info(&format!("Registering account: {}", account.email));

        match self.authenticator.register(&account).await {
            Ok(user) => {
                self.logger.info(&format!("Registered user {}", user.id));
                self.start_session(user);
                true
            }
            Err(e) => {
                self.logger.error(&format!("Registration failed: {}", e));
                self.set_loading(false);
                false
            }
        }
    }

    pub fn logout(&self) {
        self.state.update(|s| {
            s.user = None;
            s.is_logged_in = false;
            true
        });
        self.cart.clear_cart();
        self.logger.info("Signed out");
    }

    /// No-op while signed out.
    pub fn update_profile(&self, update: ProfileUpdate) {
        let updated = self.state.update(|s| match s.user.as_mut() {
            Some(user) => {
                user.apply(update);
                true
            }
            None => false,
        });
        if !updated {
            self.logger.debug("Profile update ignored, no user signed in");
        }
    }

    fn set_loading(&self, loading: bool) {
        self.state.update(|s| {
            let changed = s.is_loading != loading;
            s.is_loading = loading;
            changed
        });
    }

    fn start_session(&self, user: User) {
        self.state.update(|s| {
            s.user = Some(user);
            s.is_logged_in = true;
            s.is_loading = false;
            true
        });
    }
}
