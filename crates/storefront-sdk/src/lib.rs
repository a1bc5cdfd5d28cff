//! Public SDK for storefront page workloads.
//!
//! Re-exports the platform crates so a page crate depends on one thing:
//!
//! ```ignore
//! use storefront_sdk::storefront_core::{Method, RequestContext};
//! use storefront_sdk::storefront_streaming::{HeadContent, Shell, StreamingSink};
//! ```

pub use storefront_catalog;
pub use storefront_core;
pub use storefront_data;
pub use storefront_observability;
pub use storefront_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use storefront_catalog::*;
    pub use storefront_core::*;
    pub use storefront_data::*;
    pub use storefront_observability::*;
    pub use storefront_streaming::*;
}
