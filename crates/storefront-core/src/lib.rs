//! Core abstractions for the storefront page platform.
//!
//! This crate provides the fundamental types shared by every page:
//! - `RequestContext` - Typed request parameters
//! - `TimingContext` - Request lifecycle timing marks
//! - `ApiConfig` - Backend API endpoint configuration
//! - `PageError` - Error type for page handlers

mod config;
mod context;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
