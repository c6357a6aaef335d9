use axum::{
    routing::{get, post},
    Router,
};

pub mod pages;
pub mod products;
pub mod system;

/// Router for every page. A known path hit with the wrong method gets the
/// 404 view too, same as an unknown path.
pub fn router() -> Router {
    Router::new()
        .route("/", get(products::index).fallback(pages::not_found))
        .route("/search_products", post(products::search_products).fallback(pages::not_found))
        .route("/sort_products", post(products::sort_products).fallback(pages::not_found))
        .route("/submit", get(products::submit_page).fallback(pages::not_found))
        .route("/add_product", post(products::add_product).fallback(pages::not_found))
        .route("/about", get(pages::about).fallback(pages::not_found))
        .route("/contact", get(pages::contact).fallback(pages::not_found))
        .route("/health", get(system::health).fallback(pages::not_found))
}
