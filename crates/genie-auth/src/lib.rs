//! FormGenie Account & Session Management
//!
//! Email/password accounts with address verification, JWT-backed
//! sessions and server-side revocation for the portal surface.

pub mod error;
pub mod model;
pub mod password;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use model::{AuthSession, AuthenticatedUser, SignUpOutcome, User, UserStatus};
pub use service::{AuthEvent, AuthService};
pub use token::Claims;
