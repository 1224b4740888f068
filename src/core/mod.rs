//! Core Module - Counter Business Logic

pub mod counter;

pub use counter::*;
