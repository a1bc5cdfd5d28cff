//! Facet reference data.
//!
//! Facets are the filterable product attributes the sidebar offers:
//! category, color, size, and style. Each list is fetched once per
//! sidebar render and treated as read-only.

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// A product color. `hex_code` is optional; when absent the color name
/// itself is used as the CSS color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: u64,
    pub name: String,
    #[serde(rename = "hexCode", default)]
    pub hex_code: Option<String>,
}

impl Color {
    /// CSS color value for a swatch: the hex code when present,
    /// otherwise the color name.
    pub fn css_value(&self) -> &str {
        self.hex_code.as_deref().unwrap_or(&self.name)
    }
}

/// A product size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub id: u64,
    pub name: String,
}

/// A product style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub id: u64,
    pub name: String,
}

/// The four facet lists the sidebar renders.
///
/// Any list may be empty: a failed facet fetch leaves its list empty
/// and the sidebar renders what it has.
#[derive(Debug, Clone, Default)]
pub struct FacetData {
    pub categories: Vec<Category>,
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
    pub styles: Vec<Style>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_css_value_prefers_hex() {
        let green = Color {
            id: 1,
            name: "Green".to_string(),
            hex_code: Some("#23C69A".to_string()),
        };
        assert_eq!(green.css_value(), "#23C69A");

        let teal = Color {
            id: 2,
            name: "teal".to_string(),
            hex_code: None,
        };
        assert_eq!(teal.css_value(), "teal");
    }

    #[test]
    fn test_color_hex_code_field_name() {
        let color: Color =
            serde_json::from_str(r##"{"id":4,"name":"Black","hexCode":"#121212"}"##).unwrap();
        assert_eq!(color.hex_code.as_deref(), Some("#121212"));

        let no_hex: Color = serde_json::from_str(r#"{"id":5,"name":"Red"}"#).unwrap();
        assert!(no_hex.hex_code.is_none());
    }
}
