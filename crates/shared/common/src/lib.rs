//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The caller-visible error type and its HTTP rendering
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
