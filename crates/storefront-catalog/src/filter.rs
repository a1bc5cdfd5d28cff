//! Filter and sort engine.
//!
//! `FilterOptions` holds the current user selection; applying it is a
//! pure projection over the product list. A facet with no selection
//! passes every product: absence means "no constraint", never "match
//! nothing".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The active set of user-selected facet constraints plus price bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub category: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub style: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            category: None,
            color: None,
            size: None,
            style: None,
            min_price: 0.0,
            max_price: f64::INFINITY,
        }
    }
}

impl FilterOptions {
    /// Whether any facet or price constraint is active.
    pub fn is_active(&self) -> bool {
        self.category.is_some()
            || self.color.is_some()
            || self.size.is_some()
            || self.style.is_some()
            || self.min_price > 0.0
            || self.max_price.is_finite()
    }

    /// Test a single product against every active predicate.
    ///
    /// Price bounds are inclusive at both ends.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(want) = &self.category {
            let hit = product
                .category
                .as_ref()
                .is_some_and(|c| c.name == *want);
            if !hit {
                return false;
            }
        }

        if let Some(want) = &self.color {
            if !product.colors.iter().any(|c| c.name == *want) {
                return false;
            }
        }

        if let Some(want) = &self.size {
            if !product.sizes.iter().any(|s| s.name == *want) {
                return false;
            }
        }

        if let Some(want) = &self.style {
            let hit = product.style.as_ref().is_some_and(|s| s.name == *want);
            if !hit {
                return false;
            }
        }

        product.price >= self.min_price && product.price <= self.max_price
    }

    /// Project the product list through the active predicates,
    /// preserving input order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Keep the backend's input order.
    #[default]
    Unsorted,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
}

impl SortOption {
    /// Parse a query-string token; unknown tokens keep input order.
    pub fn from_token(s: &str) -> Self {
        match s {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            _ => Self::Unsorted,
        }
    }

    /// Query-string token for this option.
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Unsorted => "",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }

    /// Label for the sort select control.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unsorted => "Sort by",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
        }
    }

    /// All options, in select-control order.
    pub fn all() -> [SortOption; 3] {
        [Self::Unsorted, Self::PriceAsc, Self::PriceDesc]
    }
}

/// Stable sort of a filtered projection by the selected ordering.
pub fn apply_sort(products: &mut [&Product], sort: SortOption) {
    match sort {
        SortOption::Unsorted => {}
        SortOption::PriceAsc => products.sort_by(|a, b| cmp_price(a, b)),
        SortOption::PriceDesc => products.sort_by(|a, b| cmp_price(b, a)),
    }
}

fn cmp_price(a: &Product, b: &Product) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}
