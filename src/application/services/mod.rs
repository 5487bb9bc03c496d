//! Business logic services for the application layer.

pub mod auth_service;
pub mod dict_type_service;

pub use auth_service::{AuthService, Operator};
pub use dict_type_service::{DictTypeInput, DictTypeService};
