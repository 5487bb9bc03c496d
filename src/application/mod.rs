//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules.
//! They consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::dict_type_service::DictTypeService`] - Dictionary type listing and maintenance
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
