//! Section renderers for the product listing page.

mod grid;
mod sidebar;

pub use grid::*;
pub use sidebar::*;
