#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.name_empty")]
    NameEmpty,
    #[error("auth.email_empty")]
    EmailEmpty,
    #[error("auth.password_empty")]
    PasswordEmpty,
    #[error("auth.password_mismatch")]
    PasswordMismatch,
    #[error("auth.terms_not_accepted")]
    TermsNotAccepted,
    #[error("auth.service_unavailable")]
    ServiceUnavailable,
}
