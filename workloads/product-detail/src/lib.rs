//! Product detail page.
//!
//! Fetches one product by the identifier in the route and renders the
//! gallery and information columns. The page re-fetches from scratch on
//! every navigation; nothing is cached between requests.

mod sections;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use storefront_sdk::storefront_catalog::Product;
use storefront_sdk::storefront_core::{ApiConfig, RequestContext};
use storefront_sdk::storefront_data::FetchClient;
use storefront_sdk::storefront_observability::{LogLevel, StructuredLogger};
use storefront_sdk::storefront_streaming::{HeadContent, Shell, StreamingSink};

use sections::{render_detail_skeleton, render_gallery, render_info, render_not_found};

/// Product detail page handler.
#[http_component]
async fn handle_detail(req: IncomingRequest, response_out: ResponseOutparam) {
    if req.method() != Method::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(
        storefront_sdk::storefront_core::Method::Get,
        path_with_query.clone(),
    );
    let product_id = extract_product_id(ctx.route());

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_page("product-detail")
        .with_route(ctx.route())
        .with_min_level(LogLevel::Debug);

    logger
        .info_builder("Detail request started")
        .field(
            "product_id",
            product_id.map_or("invalid".to_string(), |id| id.to_string()),
        )
        .emit();

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
    ];
    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = create_shell();
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        logger
            .error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }

    let Some(product_id) = product_id else {
        let _ = sink.send_section("info", &render_not_found()).await;
        let _ = sink.send_raw(shell.render_closing().into_bytes()).await;
        sink.complete();
        return;
    };

    let config = ApiConfig::from_env();
    let client = FetchClient::new(ctx.request_id.clone());

    match client
        .fetch_result::<Product>(&config.product_url(product_id))
        .await
    {
        Ok(product) => {
            logger
                .debug_builder("Product fetched")
                .field("name", product.name.clone())
                .field_i64("images", product.images.len() as i64)
                .emit();
            let _ = sink
                .send_section(
                    "layout-start",
                    r#"<div class="detail-layout">"#,
                )
                .await;
            let _ = sink.send_section("gallery", &render_gallery(&product)).await;
            let _ = sink.send_section("info", &render_info(&product)).await;
            let _ = sink.send_section("layout-end", r#"</div>"#).await;
        }
        Err(e) => {
            // No retry and no error copy: the page stays in its
            // loading placeholder.
            logger
                .error_builder("Product fetch failed")
                .field("error", e.to_string())
                .emit();
            let _ = sink.send_section("info", &render_detail_skeleton()).await;
        }
    }

    let closing = format!("{}\n{}", detail_page_scripts(), shell.render_closing());
    let _ = sink.send_raw(closing.into_bytes()).await;
    sink.complete();
    logger.info("Detail request complete");
}

/// Extract the numeric product identifier from a path like `/product/3`.
fn extract_product_id(path: &str) -> Option<u64> {
    path.strip_prefix("/product/")
        .and_then(|rest| rest.split('/').next())
        .and_then(|id| id.parse().ok())
}

/// Create the detail page shell.
fn create_shell() -> Shell {
    let head = HeadContent::new("Product | Storefront")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(DETAIL_STYLES);

    Shell::new(head).with_body_start(
        r#"<body>
<main class="detail-container">
<a href="/" class="back-link">&larr; Back to Products</a>
"#,
    )
}

fn detail_page_scripts() -> String {
    r#"<script>
function setMainImage(url) {
    const main = document.getElementById('main-image');
    if (main) {
        main.src = url;
    }
    document.querySelectorAll('.thumbnail').forEach(t => {
        t.classList.toggle('active', t.src === url);
    });
}

function selectOption(el, group) {
    document.querySelectorAll('.' + group + '-option').forEach(b => {
        b.classList.remove('selected');
    });
    el.classList.add('selected');
}

function stepQuantity(delta) {
    const input = document.getElementById('quantity');
    if (input) {
        input.value = Math.max(1, (parseInt(input.value) || 1) + delta);
    }
}

// Offer countdown, seeded at 5d 11:23:02.
(function () {
    let remaining = ((5 * 24 + 11) * 60 + 23) * 60 + 2;
    const pad = n => String(n).padStart(2, '0');
    const tick = () => {
        if (remaining <= 0) { clearInterval(timer); return; }
        remaining -= 1;
        const days = Math.floor(remaining / 86400);
        const hours = Math.floor((remaining % 86400) / 3600);
        const minutes = Math.floor((remaining % 3600) / 60);
        const seconds = remaining % 60;
        const set = (id, value) => {
            const el = document.getElementById(id);
            if (el) el.textContent = pad(value);
        };
        set('cd-days', days);
        set('cd-hours', hours);
        set('cd-minutes', minutes);
        set('cd-seconds', seconds);
    };
    const timer = setInterval(tick, 1000);
})();
</script>"#
        .to_string()
}

const DETAIL_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: #fff;
    color: #1e293b;
    line-height: 1.5;
}

.detail-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem 1rem;
}

.back-link {
    display: inline-block;
    margin-bottom: 1rem;
    padding: 0.5rem 1rem;
    background: #e2e8f0;
    color: #1e293b;
    border-radius: 4px;
    text-decoration: none;
}

.detail-layout {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.main-image {
    width: 100%;
    height: 32rem;
    object-fit: cover;
    border-radius: 8px;
    background: #f1f5f9;
}

.main-image-placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    color: #64748b;
}

.thumbnails {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 0.5rem;
    margin-top: 0.5rem;
}

.thumbnail {
    width: 100%;
    height: 8rem;
    object-fit: cover;
    border-radius: 4px;
    cursor: pointer;
}

.thumbnail.active {
    outline: 2px solid #2563eb;
}

.product-name {
    font-size: 1.875rem;
    margin-bottom: 0.75rem;
}

.product-description {
    color: #64748b;
    margin-bottom: 1rem;
}

.rating-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.stars .star.filled { color: #facc15; }

.review-count { color: #64748b; }

.price {
    font-size: 1.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.original-price {
    color: #64748b;
    text-decoration: line-through;
    font-size: 1.125rem;
    font-weight: 400;
}

.watchers {
    color: #64748b;
    margin-bottom: 1rem;
}

.offer-countdown { margin-bottom: 1rem; }

.offer-label { font-weight: 700; margin-bottom: 0.5rem; }

.countdown-units {
    display: flex;
    gap: 1rem;
}

.countdown-unit {
    text-align: center;
}

.countdown-unit span {
    font-size: 1.5rem;
    font-weight: 700;
}

.option-group { margin-bottom: 1rem; }

.option-label { font-weight: 700; margin-bottom: 0.5rem; }

.color-options, .size-options {
    display: flex;
    gap: 0.5rem;
}

.color-option {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    border: none;
    cursor: pointer;
}

.color-option.selected {
    outline: 2px solid #121212;
    outline-offset: 2px;
}

.size-option {
    padding: 0.25rem 0.75rem;
    border: 1px solid #e2e8f0;
    border-radius: 4px;
    background: #fff;
    cursor: pointer;
}

.size-option.selected {
    background: #121212;
    color: #fff;
}

.quantity-stepper {
    display: flex;
    margin-bottom: 1rem;
}

.quantity-stepper button {
    padding: 0.25rem 0.75rem;
    border: 1px solid #e2e8f0;
    background: #fff;
    cursor: pointer;
}

.quantity-stepper input {
    width: 4rem;
    text-align: center;
    border: 1px solid #e2e8f0;
    border-left: none;
    border-right: none;
}

.add-to-cart, .buy-now {
    width: 100%;
    padding: 0.625rem;
    border: none;
    border-radius: 4px;
    color: #fff;
    cursor: pointer;
    margin-bottom: 0.5rem;
}

.add-to-cart { background: #2563eb; }
.buy-now { background: #121212; }

.secondary-actions {
    display: flex;
    justify-content: space-between;
}

.secondary-actions button {
    background: none;
    border: none;
    color: #64748b;
    cursor: pointer;
}

.detail-skeleton {
    display: flex;
    justify-content: center;
    align-items: center;
    min-height: 60vh;
}

.spinner {
    width: 6rem;
    height: 6rem;
    border: 3px solid #e2e8f0;
    border-top-color: #2563eb;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.not-found { text-align: center; padding: 4rem 0; }

@media (max-width: 768px) {
    .detail-layout { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_product_id() {
        assert_eq!(extract_product_id("/product/3"), Some(3));
        assert_eq!(extract_product_id("/product/42/gallery"), Some(42));
        assert_eq!(extract_product_id("/product/abc"), None);
        assert_eq!(extract_product_id("/products"), None);
        assert_eq!(extract_product_id("/product/"), None);
    }
}
