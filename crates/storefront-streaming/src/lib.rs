//! Streaming primitives for shell-first SSR.
//!
//! - `Shell` / `HeadContent` - page shell template
//! - `StreamingSink` - shell-before-sections streaming

mod shell;
mod sink;

pub use shell::*;
pub use sink::*;
