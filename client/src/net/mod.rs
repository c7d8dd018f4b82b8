//! REST access to the MediLocate backend.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
