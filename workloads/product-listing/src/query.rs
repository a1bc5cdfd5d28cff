//! Listing page URL state.
//!
//! Every discrete user action on the page is a link or control that
//! produces a new GET request, so the whole listing state lives in the
//! query string: facet selections, max price, sort, and whether the
//! grid is showing all filtered products.

use storefront_sdk::storefront_catalog::{FilterOptions, SortOption};

/// Parsed listing page query state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub style: Option<String>,
    pub max_price: Option<f64>,
    pub sort: SortOption,
    /// `show=all` in the query string.
    pub show_all: bool,
}

impl ListingQuery {
    /// Parse listing state from a URL query string.
    ///
    /// Unknown keys are ignored; unparsable numbers fall back to no
    /// constraint.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = ListingQuery::default();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = urlencoding_decode(value);
            if decoded.is_empty() {
                continue;
            }

            match key {
                "category" => query.category = Some(decoded),
                "color" => query.color = Some(decoded),
                "size" => query.size = Some(decoded),
                "style" => query.style = Some(decoded),
                "max_price" => query.max_price = decoded.parse().ok(),
                "sort" => query.sort = SortOption::from_token(&decoded),
                "show" => query.show_all = decoded == "all",
                _ => {}
            }
        }

        query
    }

    /// The filter constraints this query selects.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            category: self.category.clone(),
            color: self.color.clone(),
            size: self.size.clone(),
            style: self.style.clone(),
            min_price: 0.0,
            max_price: self.max_price.unwrap_or(f64::INFINITY),
        }
    }

    /// Href toggling the category selection. Clicking the selected
    /// value clears it; any filter change drops `show`.
    pub fn toggle_category_href(&self, name: &str) -> String {
        let mut next = self.clone();
        next.category = toggled(&self.category, name);
        next.show_all = false;
        next.href()
    }

    /// Href toggling the color selection.
    pub fn toggle_color_href(&self, name: &str) -> String {
        let mut next = self.clone();
        next.color = toggled(&self.color, name);
        next.show_all = false;
        next.href()
    }

    /// Href toggling the size selection.
    pub fn toggle_size_href(&self, name: &str) -> String {
        let mut next = self.clone();
        next.size = toggled(&self.size, name);
        next.show_all = false;
        next.href()
    }

    /// Href toggling the style selection.
    pub fn toggle_style_href(&self, name: &str) -> String {
        let mut next = self.clone();
        next.style = toggled(&self.style, name);
        next.show_all = false;
        next.href()
    }

    /// Href for the "Load more" control: same filters, showing all.
    pub fn show_all_href(&self) -> String {
        let mut next = self.clone();
        next.show_all = true;
        next.href()
    }

    /// Href for the "Load less" control: same filters, first page.
    pub fn show_less_href(&self) -> String {
        let mut next = self.clone();
        next.show_all = false;
        next.href()
    }

    /// Serialize the state back to a relative `?...` href.
    pub fn href(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(v) = &self.category {
            pairs.push(("category", urlencoding_encode(v)));
        }
        if let Some(v) = &self.color {
            pairs.push(("color", urlencoding_encode(v)));
        }
        if let Some(v) = &self.size {
            pairs.push(("size", urlencoding_encode(v)));
        }
        if let Some(v) = &self.style {
            pairs.push(("style", urlencoding_encode(v)));
        }
        if let Some(v) = self.max_price {
            pairs.push(("max_price", format!("{}", v)));
        }
        if self.sort != SortOption::Unsorted {
            pairs.push(("sort", self.sort.as_token().to_string()));
        }
        if self.show_all {
            pairs.push(("show", "all".to_string()));
        }

        if pairs.is_empty() {
            return "?".to_string();
        }

        let qs: Vec<String> = pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!("?{}", qs.join("&"))
    }
}

fn toggled(current: &Option<String>, clicked: &str) -> Option<String> {
    match current {
        Some(v) if v == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

/// Simple URL decoding.
pub fn urlencoding_decode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                result.push(byte as char);
            }
        } else if c == '+' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

/// Simple URL encoding.
pub fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}
