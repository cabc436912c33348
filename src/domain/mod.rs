//! Domain layer - Core business entities and logic
//!
//! Contains the user entity, the password value object and the payloads
//! accepted by the credential operations.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{Credentials, Registration, User, UserResponse, UserUpdate};
