//! Models Module - Error Types
//!
//! Single source of truth for failure codes shared by the store, the
//! counter service and the API layer.

pub mod errors;

pub use errors::*;
