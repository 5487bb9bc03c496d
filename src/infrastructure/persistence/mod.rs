//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgDictTypeRepository`] - Dictionary type storage and search
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_dict_type_repository;
pub mod pg_token_repository;

pub use pg_dict_type_repository::PgDictTypeRepository;
pub use pg_token_repository::PgTokenRepository;
