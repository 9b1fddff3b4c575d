use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub member_since: DateTime<Utc>,
}

impl User {
    /// Merges the fields present in `update`, leaving the others untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
    }
}

/// Partial profile edit; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Raw input of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

/// A registration request that passed form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

impl NewAccount {
    pub fn new(form: RegistrationForm) -> Result<Self, AuthError> {
        if form.name.trim().is_empty() {
            return Err(AuthError::NameEmpty);
        }
        if form.email.trim().is_empty() {
            return Err(AuthError::EmailEmpty);
        }
        if form.password.trim().is_empty() {
            return Err(AuthError::PasswordEmpty);
        }
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !form.accepted_terms {
            return Err(AuthError::TermsNotAccepted);
        }

        Ok(Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.filter(|p| !p.trim().is_empty()),
            password: form.password,
        })
    }
}
