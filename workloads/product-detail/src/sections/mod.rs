//! Section renderers for the product detail page.

mod gallery;
mod info;

pub use gallery::*;
pub use info::*;
