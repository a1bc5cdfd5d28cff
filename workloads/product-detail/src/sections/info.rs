//! Product information section: name, rating row, pricing, offer
//! countdown, option pickers, and purchase controls.

use storefront_sdk::storefront_catalog::Product;

/// Render the product information column.
pub fn render_info(product: &Product) -> String {
    let price_html = match product.original_price {
        Some(original) => format!(
            r#"<p class="price">${:.2} <span class="original-price">${:.2}</span></p>"#,
            product.price, original
        ),
        None => format!(r#"<p class="price">${:.2}</p>"#, product.price),
    };

    let colors_html: String = product
        .colors
        .iter()
        .map(|color| {
            let css = color
                .hex_code
                .clone()
                .unwrap_or_else(|| named_color_hex(&color.name));
            format!(
                r#"<button class="color-option" style="background-color: {}" title="{}" onclick="selectOption(this, 'color')" aria-label="Color {}"></button>"#,
                html_escape(&css),
                html_escape(&color.name),
                html_escape(&color.name)
            )
        })
        .collect();

    let sizes_html: String = product
        .sizes
        .iter()
        .map(|size| {
            format!(
                r#"<button class="size-option" onclick="selectOption(this, 'size')">{}</button>"#,
                html_escape(&size.name)
            )
        })
        .collect();

    format!(
        r#"<div class="product-info" data-section="info">
    <h1 class="product-name">{name}</h1>
    <p class="product-description">{description}</p>
    <div class="rating-row">
        {stars}
        <span class="review-count">{views} Reviews</span>
    </div>
    {price_html}
    <p class="watchers">32 people are looking at this product</p>
    <div class="offer-countdown">
        <p class="offer-label">Hurry up, offer expired in:</p>
        <div class="countdown-units">
            <div class="countdown-unit"><span id="cd-days">05</span><p>Days</p></div>
            <div class="countdown-unit"><span id="cd-hours">11</span><p>Hours</p></div>
            <div class="countdown-unit"><span id="cd-minutes">23</span><p>Minutes</p></div>
            <div class="countdown-unit"><span id="cd-seconds">02</span><p>Seconds</p></div>
        </div>
    </div>
    <div class="option-group">
        <p class="option-label">Color:</p>
        <div class="color-options">{colors_html}</div>
    </div>
    <div class="option-group">
        <p class="option-label">Size:</p>
        <div class="size-options">{sizes_html}</div>
    </div>
    <div class="quantity-stepper">
        <button onclick="stepQuantity(-1)">-</button>
        <input id="quantity" type="number" value="1" min="1">
        <button onclick="stepQuantity(1)">+</button>
    </div>
    <button class="add-to-cart">Add to Cart</button>
    <button class="buy-now">Buy Now</button>
    <div class="secondary-actions">
        <button>&hearts; Wishlist</button>
        <button>&#128276; Ask question</button>
        <button>&#8599; Share</button>
    </div>
</div>"#,
        name = html_escape(&product.name),
        description = html_escape(&product.description),
        stars = render_star_row(),
        views = product.views,
        price_html = price_html,
        colors_html = colors_html,
        sizes_html = sizes_html,
    )
}

// Fixed five-star row; the actual rating field is not consulted here.
fn render_star_row() -> String {
    let mut html = String::from(r#"<span class="stars">"#);
    for _ in 0..5 {
        html.push_str(r#"<span class="star filled">&#9733;</span>"#);
    }
    html.push_str("</span>");
    html
}

/// Hex fallback for the storefront's named colors, used when the
/// backend sends no hex code.
fn named_color_hex(name: &str) -> String {
    match name.to_lowercase().as_str() {
        "green" => "#23C69A".to_string(),
        "purple" => "#AE83F7".to_string(),
        "red" => "#E25663".to_string(),
        "black" => "#121212".to_string(),
        other => other.to_string(),
    }
}

/// Loading placeholder shown while (or if) the product never arrives:
/// a failed fetch leaves the page here.
pub fn render_detail_skeleton() -> String {
    r#"<div class="detail-skeleton" data-section="info">
    <div class="spinner" role="status" aria-label="Loading"></div>
</div>"#
        .to_string()
}

/// Not-found rendering for paths without a usable product identifier.
pub fn render_not_found() -> String {
    r#"<div class="not-found" data-section="info">
    <h1>Product not found</h1>
    <p><a href="/">&larr; Back to Products</a></p>
</div>"#
        .to_string()
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
    use storefront_sdk::storefront_catalog::{Color, Size};

    fn product() -> Product {
        Product {
            id: 3,
            name: "Linen Shirt".to_string(),
            description: "Relaxed fit.".to_string(),
            price: 45.0,
            original_price: Some(60.0),
            images: Vec::new(),
            rating: 3.0,
            views: 87,
            colors: vec![
                Color { id: 1, name: "Green".to_string(), hex_code: None },
                Color { id: 2, name: "Black".to_string(), hex_code: Some("#000".to_string()) },
            ],
            sizes: vec![Size { id: 1, name: "M".to_string() }],
            category: None,
            style: None,
        }
    }

    #[test]
    fn test_star_row_is_always_five_filled() {
        // Rating is 3.0 but the detail page renders five filled stars.
        let html = render_info(&product());
        assert_eq!(html.matches("star filled").count(), 5);
        assert!(html.contains("87 Reviews"));
    }

    #[test]
    fn test_price_with_struck_original() {
        let html = render_info(&product());
        assert!(html.contains("$45.00"));
        assert!(html.contains(r#"<span class="original-price">$60.00</span>"#));
    }

    #[test]
    fn test_color_fallback_and_explicit_hex() {
        let html = render_info(&product());
        // Green has no hex code from the backend: named fallback.
        assert!(html.contains("background-color: #23C69A"));
        // Black does: used as-is.
        assert!(html.contains("background-color: #000"));
    }

    #[test]
    fn test_countdown_seed_values() {
        let html = render_info(&product());
        assert!(html.contains(r#"<span id="cd-days">05</span>"#));
        assert!(html.contains(r#"<span id="cd-seconds">02</span>"#));
    }

    #[test]
    fn test_unknown_color_name_passes_through() {
        assert_eq!(named_color_hex("teal"), "teal");
        assert_eq!(named_color_hex("Red"), "#E25663");
    }
}
