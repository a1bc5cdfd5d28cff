//! Catalog domain model and the filter/sort/paginate engine.
//!
//! Everything here is pure computation over an already-fetched product
//! list: predicates, ordering, and the load-more display window. The
//! engine is re-derived from its inputs on every call; nothing is
//! cached between requests.

mod display;
mod facet;
mod filter;
mod product;

pub use display::*;
pub use facet::*;
pub use filter::*;
pub use product::*;
