//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence concerns.
//!
//! # Entity Types
//!
//! - [`DictType`] - A dictionary type (category of dictionary entries)
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! - [`NewDictType`] - For creating new records
//! - [`DictTypePatch`] - For replacing the editable columns of a record
//!
//! Query inputs are modelled separately as [`DictTypeFilter`] and [`Page`].

pub mod dict_type;

pub use dict_type::{DictType, DictTypeFilter, DictTypePatch, DictTypeStatus, NewDictType, Page};
