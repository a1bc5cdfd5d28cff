//! Product grid section with count header and load-more control.

use storefront_sdk::storefront_catalog::{DisplayState, Product, SortOption};

use crate::query::ListingQuery;

/// Render the grid header: product count and the sort select.
///
/// The count line always renders, including "0 products".
pub fn render_grid_header(count: usize, query: &ListingQuery) -> String {
    let options_html: String = SortOption::all()
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                option.as_token(),
                if *option == query.sort { " selected" } else { "" },
                option.display_name()
            )
        })
        .collect();

    format!(
        r#"<div class="grid-header" data-section="grid-header">
    <p class="product-count">{count} products</p>
    <select class="sort-select" onchange="setSort(this.value)" aria-label="Sort products">
        {options_html}
    </select>
</div>"#
    )
}

/// Render the visible slice of the filtered products.
pub fn render_grid(products: &[&Product], state: &DisplayState) -> String {
    let visible = state.visible_count(products.len());
    let cards_html: String = products[..visible]
        .iter()
        .map(|p| render_product_card(p))
        .collect();

    format!(
        r#"<section class="product-grid" data-section="grid">
    {cards_html}
</section>"#
    )
}

fn render_product_card(product: &Product) -> String {
    let image_html = match product.primary_image_url() {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="card-image" loading="lazy">"#,
            html_escape(url),
            html_escape(&product.name)
        ),
        None => r#"<div class="card-image card-image-placeholder"></div>"#.to_string(),
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <a href="/product/{id}" class="card-link">
        {image_html}
        <div class="card-body">
            <div class="card-rating">{stars}</div>
            <h3 class="card-name">{name}</h3>
            <p class="card-price">${price:.2}</p>
        </div>
    </a>
</article>"#,
        id = product.id,
        image_html = image_html,
        stars = render_stars(product.star_count()),
        name = html_escape(&product.name),
        price = product.price,
    )
}

fn render_stars(filled: u32) -> String {
    let mut html = String::from(r#"<span class="stars">"#);
    for i in 0..5 {
        if i < filled {
            html.push_str(r#"<span class="star filled">&#9733;</span>"#);
        } else {
            html.push_str(r#"<span class="star empty">&#9733;</span>"#);
        }
    }
    html.push_str("</span>");
    html
}

/// Render the load-more / load-less control.
///
/// Nothing renders when the filtered set fits in the default window.
pub fn render_load_toggle(
    query: &ListingQuery,
    state: &DisplayState,
    filtered_len: usize,
) -> String {
    if state.can_show_more(filtered_len) {
        format!(
            r#"<a href="{}" class="load-toggle" data-section="load-toggle">Load more</a>"#,
            query.show_all_href()
        )
    } else if state.can_show_less(filtered_len) {
        format!(
            r#"<a href="{}" class="load-toggle" data-section="load-toggle">Load less</a>"#,
            query.show_less_href()
        )
    } else {
        String::new()
    }
}

/// Skeleton placeholder shown when the catalog fetch fails: the view
/// stays in its loading state.
pub fn render_grid_skeleton() -> String {
    let cards: String = (0..8)
        .map(|_| {
            r#"<div class="product-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="product-grid skeleton" data-section="grid">
    {cards}
</section>"#
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
    use storefront_sdk::storefront_catalog::ProductImage;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            price,
            original_price: None,
            images: vec![ProductImage {
                id,
                url: format!("https://cdn.example.com/{}.jpg", id),
                primary: true,
            }],
            rating: 3.0,
            views: 0,
            colors: Vec::new(),
            sizes: Vec::new(),
            category: None,
            style: None,
        }
    }

    #[test]
    fn test_header_renders_zero_count() {
        let html = render_grid_header(0, &ListingQuery::default());
        assert!(html.contains("0 products"));
    }

    #[test]
    fn test_header_marks_selected_sort() {
        let query = ListingQuery::from_query_string("sort=price_asc");
        let html = render_grid_header(3, &query);
        assert!(html.contains(r#"value="price_asc" selected"#));
    }

    #[test]
    fn test_grid_renders_visible_slice_only() {
        let products: Vec<Product> = (1..=12).map(|i| product(i, i as f64)).collect();
        let refs: Vec<&Product> = products.iter().collect();
        let html = render_grid(&refs, &DisplayState::new());
        assert!(html.contains(r#"data-product-id="8""#));
        assert!(!html.contains(r#"data-product-id="9""#));
    }

    #[test]
    fn test_grid_renders_all_when_showing_all() {
        let products: Vec<Product> = (1..=12).map(|i| product(i, i as f64)).collect();
        let refs: Vec<&Product> = products.iter().collect();
        let html = render_grid(&refs, &DisplayState::showing_all(refs.len()));
        assert!(html.contains(r#"data-product-id="12""#));
    }

    #[test]
    fn test_empty_grid_renders_no_cards() {
        let html = render_grid(&[], &DisplayState::new());
        assert!(!html.contains("product-card"));
        assert!(html.contains("product-grid"));
    }

    #[test]
    fn test_star_row_uses_actual_rating() {
        let html = render_product_card(&product(1, 10.0));
        assert_eq!(html.matches(r#"star filled"#).count(), 3);
        assert_eq!(html.matches(r#"star empty"#).count(), 2);
    }

    #[test]
    fn test_load_toggle_hidden_for_small_sets() {
        let query = ListingQuery::default();
        assert!(render_load_toggle(&query, &DisplayState::new(), 8).is_empty());
        assert!(render_load_toggle(&query, &DisplayState::new(), 0).is_empty());
    }

    #[test]
    fn test_load_toggle_flips_with_state() {
        let query = ListingQuery::default();
        let more = render_load_toggle(&query, &DisplayState::new(), 20);
        assert!(more.contains("Load more"));
        assert!(more.contains("show=all"));

        let less = render_load_toggle(&query, &DisplayState::showing_all(20), 20);
        assert!(less.contains("Load less"));
        assert!(!less.contains("show=all"));
    }
}
