//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`DictTypeRepository`] - Dictionary type CRUD operations
//! - [`TokenRepository`] - API token authentication

pub mod dict_type_repository;
pub mod token_repository;

pub use dict_type_repository::DictTypeRepository;
pub use token_repository::{ApiToken, TokenRepository};

#[cfg(test)]
pub use dict_type_repository::MockDictTypeRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
