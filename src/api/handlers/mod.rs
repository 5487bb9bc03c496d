//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod dict_type;
pub mod health;

pub use dict_type::{
    dict_type_batch_delete_handler, dict_type_create_handler, dict_type_delete_handler,
    dict_type_get_handler, dict_type_list_handler, dict_type_option_select_handler,
    dict_type_update_handler,
};
pub use health::health_handler;
