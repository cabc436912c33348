//! Infrastructure layer - External systems integration
//!
//! - Database connection pool and migrations
//! - User repository (the only persistence boundary)

pub mod db;
pub mod repositories;

pub use db::{Database, MigrationState};
pub use repositories::{UserRepository, UserStore};

#[cfg(test)]
pub use repositories::MockUserRepository;
