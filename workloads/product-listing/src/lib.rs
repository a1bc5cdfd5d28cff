//! Product listing page.
//!
//! Renders the catalog grid with a filter sidebar. All page state —
//! facet selections, max price, sort, and the load-more window — lives
//! in the query string, so each user action is one GET request and one
//! full recompute of the filter/sort projection.

mod query;
mod sections;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use storefront_sdk::storefront_catalog::{
    apply_sort, Category, Color, DisplayState, FacetData, Product, Size, Style,
};
use storefront_sdk::storefront_core::{ApiConfig, RequestContext};
use storefront_sdk::storefront_data::{FetchClient, FetchError};
use storefront_sdk::storefront_observability::{LogLevel, StructuredLogger};
use storefront_sdk::storefront_streaming::{HeadContent, Shell, StreamingSink};

use query::ListingQuery;
use sections::{
    render_grid, render_grid_header, render_grid_skeleton, render_load_toggle, render_sidebar,
};

/// Product listing page handler.
#[http_component]
async fn handle_listing(req: IncomingRequest, response_out: ResponseOutparam) {
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
    let query = ListingQuery::from_query_string(ctx.query_string());

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_page("product-listing")
        .with_route(ctx.route())
        .with_min_level(LogLevel::Debug);

    logger
        .info_builder("Listing request started")
        .field("query", query.href())
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

    let _ = sink
        .send_section(
            "layout-start",
            r#"<div class="listing-layout"><div class="listing-sidebar">"#,
        )
        .await;

    // Catalog and the four facet lists fetch concurrently; the sidebar
    // renders once all facet fetches have settled.
    let config = ApiConfig::from_env();
    let client = FetchClient::new(ctx.request_id.clone());
    let (catalog_result, facets) = futures::join!(
        fetch_catalog(&client, &config),
        fetch_facets(&client, &config, &logger),
    );

    let _ = sink
        .send_section("sidebar", &render_sidebar(&facets, &query))
        .await;
    let _ = sink
        .send_section(
            "layout-mid",
            r#"</div><div class="listing-main">"#,
        )
        .await;

    match catalog_result {
        Ok(products) => {
            let options = query.filter_options();
            let mut filtered = options.apply(&products);
            apply_sort(&mut filtered, query.sort);

            let state = if query.show_all {
                DisplayState::showing_all(filtered.len())
            } else {
                DisplayState::new()
            };

            logger
                .debug_builder("Catalog filtered")
                .field_i64("total", products.len() as i64)
                .field_i64("filtered", filtered.len() as i64)
                .field_bool("showing_all", state.is_showing_all())
                .emit();

            let _ = sink
                .send_section("grid-header", &render_grid_header(filtered.len(), &query))
                .await;
            let _ = sink
                .send_section("grid", &render_grid(&filtered, &state))
                .await;
            let _ = sink
                .send_section(
                    "load-toggle",
                    &render_load_toggle(&query, &state, filtered.len()),
                )
                .await;
        }
        Err(e) => {
            // No retry and no error copy: the grid stays in its
            // loading placeholder.
            logger
                .error_builder("Catalog fetch failed")
                .field("error", e.to_string())
                .emit();
            let _ = sink.send_section("grid", &render_grid_skeleton()).await;
        }
    }

    let _ = sink
        .send_section("layout-end", r#"</div></div>"#)
        .await;

    let closing = format!("{}\n{}", listing_page_scripts(), shell.render_closing());
    let _ = sink.send_raw(closing.into_bytes()).await;
    sink.complete();
    logger.info("Listing request complete");
}

/// Fetch the full catalog: one page of up to 100 products.
async fn fetch_catalog(
    client: &FetchClient,
    config: &ApiConfig,
) -> Result<Vec<Product>, FetchError> {
    client
        .fetch_page::<Product>(&config.products_url(0, 100))
        .await
}

/// Fetch the four facet lists, each page-limited to 10 items.
///
/// A failed fetch is logged and leaves that facet's list empty; the
/// sidebar renders whatever arrived.
async fn fetch_facets(
    client: &FetchClient,
    config: &ApiConfig,
    logger: &StructuredLogger,
) -> FacetData {
    let categories_url = config.facet_url("categories", 0, 10);
    let colors_url = config.facet_url("colors", 0, 10);
    let sizes_url = config.facet_url("sizes", 0, 10);
    let styles_url = config.facet_url("styles", 0, 10);
    let (categories, colors, sizes, styles) = futures::join!(
        client.fetch_page::<Category>(&categories_url),
        client.fetch_page::<Color>(&colors_url),
        client.fetch_page::<Size>(&sizes_url),
        client.fetch_page::<Style>(&styles_url),
    );

    FacetData {
        categories: unwrap_facet(categories, "categories", logger),
        colors: unwrap_facet(colors, "colors", logger),
        sizes: unwrap_facet(sizes, "sizes", logger),
        styles: unwrap_facet(styles, "styles", logger),
    }
}

fn unwrap_facet<T>(
    result: Result<Vec<T>, FetchError>,
    facet: &str,
    logger: &StructuredLogger,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            logger
                .warn_builder("Facet fetch failed")
                .field("facet", facet)
                .field("error", e.to_string())
                .emit();
            Vec::new()
        }
    }
}

/// Create the listing page shell.
fn create_shell() -> Shell {
    let head = HeadContent::new("Products")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "Browse and filter products")
        .with_style(LISTING_STYLES);

    Shell::new(head).with_body_start(
        r#"<body>
<header class="site-header">
    <a href="/" class="logo">Storefront</a>
</header>
<main class="listing-container">
"#,
    )
}

fn listing_page_scripts() -> String {
    r#"<script>
function setParam(key, value) {
    const url = new URL(window.location);
    if (value === '' || value === null) {
        url.searchParams.delete(key);
    } else {
        url.searchParams.set(key, value);
    }
    url.searchParams.delete('show');
    window.location = url;
}

function setSort(value) {
    setParam('sort', value);
}

function setMaxPrice(value) {
    setParam('max_price', value);
}
</script>"#
        .to_string()
}

const LISTING_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: #fff;
    color: #1e293b;
    line-height: 1.5;
}

.site-header {
    padding: 1rem 2rem;
    border-bottom: 1px solid #e2e8f0;
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: #1e293b;
    text-decoration: none;
}

.listing-container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 2rem;
}

.listing-layout {
    display: grid;
    grid-template-columns: 240px 1fr;
    gap: 2rem;
}

.filter-sidebar h2 {
    font-size: 1.125rem;
    margin-bottom: 1rem;
}

.facet-group {
    margin-bottom: 1.5rem;
}

.facet-title {
    font-size: 0.8125rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-bottom: 0.5rem;
}

.facet-list {
    list-style: none;
}

.facet-link {
    color: #1e293b;
    text-decoration: none;
    display: inline-block;
    padding: 0.125rem 0;
}

.facet-link.selected {
    font-weight: 700;
    text-decoration: underline;
}

.color-swatches, .size-buttons {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.color-swatch {
    width: 1.5rem;
    height: 1.5rem;
    border-radius: 50%;
    display: inline-block;
}

.color-swatch.selected {
    outline: 2px solid #121212;
    outline-offset: 2px;
}

.size-button {
    padding: 0.25rem 0.5rem;
    border: 1px solid #e2e8f0;
    border-radius: 4px;
    color: #1e293b;
    text-decoration: none;
}

.size-button.selected {
    background: #e2e8f0;
    font-weight: 700;
}

.grid-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1rem;
}

.sort-select {
    padding: 0.375rem 0.5rem;
    border: 1px solid #e2e8f0;
    border-radius: 4px;
}

.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1rem;
}

.product-card {
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    overflow: hidden;
}

.card-link {
    color: inherit;
    text-decoration: none;
    display: block;
}

.card-image {
    width: 100%;
    height: 16rem;
    object-fit: cover;
    display: block;
    background: #f1f5f9;
}

.card-body {
    padding: 1rem;
}

.card-name {
    font-weight: 600;
}

.card-price {
    color: #64748b;
}

.stars .star { color: #e2e8f0; }
.stars .star.filled { color: #facc15; }

.load-toggle {
    display: block;
    margin-top: 2rem;
    padding: 0.5rem;
    text-align: center;
    background: #e2e8f0;
    color: #1e293b;
    border-radius: 4px;
    text-decoration: none;
}

.skeleton .skeleton-image {
    height: 16rem;
    background: #e2e8f0;
}

.skeleton .skeleton-text {
    height: 1rem;
    margin: 0.75rem 1rem;
    background: #e2e8f0;
    border-radius: 4px;
}

.skeleton .skeleton-text.short { width: 40%; }

@media (max-width: 768px) {
    .listing-layout { grid-template-columns: 1fr; }
}
"#;
