//! Image gallery section.

use storefront_sdk::storefront_catalog::Product;

/// Render the gallery: main image seeded from the first image in the
/// product's image list, with one thumbnail per image.
pub fn render_gallery(product: &Product) -> String {
    let main_html = match product.primary_image_url() {
        Some(url) => format!(
            r#"<img id="main-image" src="{}" alt="{}" class="main-image">"#,
            html_escape(url),
            html_escape(&product.name)
        ),
        None => r#"<div class="main-image main-image-placeholder">No image available</div>"#
            .to_string(),
    };

    let thumbnails_html: String = product
        .images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            format!(
                r#"<img src="{url}" alt="{name} {n}" class="thumbnail" onclick="setMainImage('{url}')">"#,
                url = html_escape(&image.url),
                name = html_escape(&product.name),
                n = index + 1,
            )
        })
        .collect();

    format!(
        r#"<div class="gallery" data-section="gallery">
    {main_html}
    <div class="thumbnails">{thumbnails_html}</div>
</div>"#
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

    fn product_with_images(urls: &[&str]) -> Product {
        Product {
            id: 1,
            name: "Throw".to_string(),
            description: String::new(),
            price: 10.0,
            original_price: None,
            images: urls
                .iter()
                .enumerate()
                .map(|(i, url)| ProductImage {
                    id: i as u64 + 1,
                    url: url.to_string(),
                    primary: i == 0,
                })
                .collect(),
            rating: 4.0,
            views: 0,
            colors: Vec::new(),
            sizes: Vec::new(),
            category: None,
            style: None,
        }
    }

    #[test]
    fn test_main_image_is_first_in_list() {
        let product = product_with_images(&["https://cdn.example.com/a.jpg", "https://cdn.example.com/b.jpg"]);
        let html = render_gallery(&product);
        assert!(html.contains(r#"id="main-image" src="https://cdn.example.com/a.jpg""#));
        assert_eq!(html.matches("thumbnail").count(), 3); // container class + 2 imgs
    }

    #[test]
    fn test_no_images_renders_placeholder() {
        let html = render_gallery(&product_with_images(&[]));
        assert!(html.contains("No image available"));
    }
}
