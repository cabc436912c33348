//! Application services layer - Use cases and business logic.
//!
//! The credential service owns the user lifecycle and depends on the user
//! repository abstraction, so the HTTP layer never touches storage directly.

mod credential_service;
mod token;

pub use credential_service::{CredentialManager, CredentialService};
pub use token::{AccessToken, Claims, TokenIssuer};
