//! Backend API access for storefront pages.
//!
//! This crate provides:
//! - `FetchClient` - outbound JSON fetches over the platform HTTP host
//! - `ApiResponse` / `Page` - the backend's `result` / `content` envelope

mod client;
mod envelope;

pub use client::*;
pub use envelope::*;
