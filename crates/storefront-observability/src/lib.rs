//! Observability for storefront pages.
//!
//! Structured, request-scoped logging written to stderr, where the
//! platform host collects it. Every fetch failure and stream failure
//! goes through `StructuredLogger`; there is no retry and no
//! user-facing error surface, so the log is the diagnostic record.

mod logging;

pub use logging::*;
