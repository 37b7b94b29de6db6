//! Authentication Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email address has not been verified")]
    EmailNotVerified,

    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid or expired session token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid or expired verification token")]
    VerificationNotFound,
}
