//! Filter sidebar section.

use storefront_sdk::storefront_catalog::FacetData;

use crate::query::ListingQuery;

/// Render the filter sidebar.
///
/// Facet lists render as-is, including partial or empty lists from
/// failed fetches.
pub fn render_sidebar(facets: &FacetData, query: &ListingQuery) -> String {
    let categories_html: String = facets
        .categories
        .iter()
        .map(|category| {
            let selected = query.category.as_deref() == Some(category.name.as_str());
            format!(
                r#"<li><a href="{}" class="facet-link{}">{}</a></li>"#,
                query.toggle_category_href(&category.name),
                if selected { " selected" } else { "" },
                html_escape(&category.name)
            )
        })
        .collect();

    let colors_html: String = facets
        .colors
        .iter()
        .map(|color| {
            let selected = query.color.as_deref() == Some(color.name.as_str());
            format!(
                r#"<a href="{}" class="color-swatch{}" style="background-color: {}" title="{}" aria-label="Color {}"></a>"#,
                query.toggle_color_href(&color.name),
                if selected { " selected" } else { "" },
                html_escape(color.css_value()),
                html_escape(&color.name),
                html_escape(&color.name)
            )
        })
        .collect();

    let sizes_html: String = facets
        .sizes
        .iter()
        .map(|size| {
            let selected = query.size.as_deref() == Some(size.name.as_str());
            format!(
                r#"<a href="{}" class="size-button{}">{}</a>"#,
                query.toggle_size_href(&size.name),
                if selected { " selected" } else { "" },
                html_escape(&size.name)
            )
        })
        .collect();

    let styles_html: String = facets
        .styles
        .iter()
        .map(|style| {
            let selected = query.style.as_deref() == Some(style.name.as_str());
            format!(
                r#"<li><a href="{}" class="facet-link{}">{}</a></li>"#,
                query.toggle_style_href(&style.name),
                if selected { " selected" } else { "" },
                html_escape(&style.name)
            )
        })
        .collect();

    let max_price = query.max_price.unwrap_or(100.0);

    format!(
        r#"<aside class="filter-sidebar" data-section="sidebar">
    <h2>Filter</h2>
    <div class="facet-group">
        <h3 class="facet-title">Categories</h3>
        <ul class="facet-list">{categories_html}</ul>
    </div>
    <div class="facet-group">
        <h3 class="facet-title">Color</h3>
        <div class="color-swatches">{colors_html}</div>
    </div>
    <div class="facet-group">
        <h3 class="facet-title">Size</h3>
        <div class="size-buttons">{sizes_html}</div>
    </div>
    <div class="facet-group">
        <h3 class="facet-title">Price</h3>
        <input type="range" min="0" max="100" value="{max_price}"
               oninput="document.getElementById('max-price-label').textContent = this.value"
               onchange="setMaxPrice(this.value)" aria-label="Max price">
        <div>Max Price: $<span id="max-price-label">{max_price}</span></div>
    </div>
    <div class="facet-group">
        <h3 class="facet-title">Style</h3>
        <ul class="facet-list">{styles_html}</ul>
    </div>
</aside>"#
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_sdk::storefront_catalog::{Category, Color, Size, Style};

    fn facets() -> FacetData {
        FacetData {
            categories: vec![Category { id: 1, name: "Clothing".to_string() }],
            colors: vec![Color {
                id: 1,
                name: "Green".to_string(),
                hex_code: Some("#23C69A".to_string()),
            }],
            sizes: vec![Size { id: 1, name: "M".to_string() }],
            styles: vec![Style { id: 1, name: "Modern".to_string() }],
        }
    }

    #[test]
    fn test_selected_facet_marked() {
        let query = ListingQuery::from_query_string("category=Clothing");
        let html = render_sidebar(&facets(), &query);
        assert!(html.contains(r#"class="facet-link selected""#));
        // The selected value's link clears it.
        assert!(html.contains(r#"href="?""#));
    }

    #[test]
    fn test_swatch_uses_hex_code() {
        let html = render_sidebar(&facets(), &ListingQuery::default());
        assert!(html.contains("background-color: #23C69A"));
    }

    #[test]
    fn test_empty_facet_lists_render_without_error() {
        let html = render_sidebar(&FacetData::default(), &ListingQuery::default());
        assert!(html.contains("Categories"));
        assert!(html.contains("Style"));
        assert!(!html.contains("facet-link"));
    }

    #[test]
    fn test_price_slider_reflects_query() {
        let query = ListingQuery::from_query_string("max_price=42");
        let html = render_sidebar(&facets(), &query);
        assert!(html.contains(r#"value="42""#));
    }
}
