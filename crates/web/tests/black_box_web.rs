use std::sync::Arc;

use discover_infra::InMemoryProductStore;
use discover_web::app::{build_app, services::AppServices};
use reqwest::StatusCode;

struct TestServer {
    base_url: String,
    store: Arc<InMemoryProductStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, backed by the in-memory store, on an ephemeral port.
        let store = Arc::new(InMemoryProductStore::new());
        let app = build_app(Arc::new(AppServices::new(store.clone())));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            store,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn add_product(client: &reqwest::Client, srv: &TestServer, name: &str) -> String {
    let res = client
        .post(srv.url("/add_product"))
        .form(&[
            ("name", name),
            ("url", "https://example.com/item"),
            ("description", "Something worth sharing"),
            ("img_url", ""),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.text().await.unwrap()
}

async fn get_text(client: &reqwest::Client, url: String) -> (StatusCode, String) {
    let res = client.get(url).send().await.unwrap();
    let status = res.status();
    (status, res.text().await.unwrap())
}

async fn post_form(client: &reqwest::Client, url: String, form: &[(&str, &str)]) -> (StatusCode, String) {
    let res = client.post(url).form(form).send().await.unwrap();
    let status = res.status();
    (status, res.text().await.unwrap())
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in page"))
}

#[tokio::test]
async fn empty_catalog_shows_getting_started_banner() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = get_text(&client, srv.url("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No products found in the database."));
    assert!(body.contains("#aaaaaa"));
}

#[tokio::test]
async fn submitted_products_appear_in_listing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body = add_product(&client, &srv, "Rust Playground").await;
    assert!(body.contains("Product successfully added."));

    let (status, body) = get_text(&client, srv.url("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Rust Playground"));
    assert!(body.contains(r#"href="https://example.com/item""#));
    assert!(!body.contains("status-msg"));
}

#[tokio::test]
async fn invalid_submission_shows_failure_banner() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = post_form(
        &client,
        srv.url("/add_product"),
        &[("name", "   "), ("url", "https://x"), ("description", "d")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Unable to add product."));

    let too_long = "x".repeat(101);
    let (_, body) = post_form(
        &client,
        srv.url("/add_product"),
        &[("name", too_long.as_str()), ("url", "https://x"), ("description", "d")],
    )
    .await;
    assert!(body.contains("Unable to add product."));

    let (_, body) = get_text(&client, srv.url("/")).await;
    assert!(body.contains("No products found in the database."));
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    for name in ["Rust in Action", "Go Programming", "Trusty Knife"] {
        add_product(&client, &srv, name).await;
    }

    let (status, body) = post_form(&client, srv.url("/search_products"), &[("search_query", "RUST")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Rust in Action"));
    assert!(body.contains("Trusty Knife"));
    assert!(!body.contains("Go Programming"));

    let (_, body) = post_form(&client, srv.url("/search_products"), &[("search_query", "python")]).await;
    assert!(body.contains("No products found with that query."));
}

#[tokio::test]
async fn search_input_is_never_a_wildcard() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    add_product(&client, &srv, "Plain Widget").await;

    let (_, body) = post_form(&client, srv.url("/search_products"), &[("search_query", "%")]).await;
    assert!(body.contains("No products found with that query."));

    let (_, body) = post_form(&client, srv.url("/search_products"), &[("search_query", "' OR '1'='1")]).await;
    assert!(body.contains("No products found with that query."));
}

#[tokio::test]
async fn sort_returns_alphabetical_order() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (_, body) = post_form(&client, srv.url("/sort_products"), &[]).await;
    assert!(body.contains("No products currently exist."));

    for name in ["cherry", "Banana", "apple"] {
        add_product(&client, &srv, name).await;
    }

    let (status, body) = post_form(&client, srv.url("/sort_products"), &[]).await;
    assert_eq!(status, StatusCode::OK);
    let a = position(&body, ">apple<");
    let b = position(&body, ">Banana<");
    let c = position(&body, ">cherry<");
    assert!(a < b && b < c, "expected apple < Banana < cherry");
}

#[tokio::test]
async fn database_failure_renders_error_banner() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    srv.store.set_unavailable(true);

    let (status, body) = get_text(&client, srv.url("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("There was an error. Please reload to try again."));
    assert!(body.contains("#eb4d4b"));

    let (status, body) = post_form(&client, srv.url("/search_products"), &[("search_query", "x")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("There was an error. Please reload and try again."));

    let (_, body) = post_form(&client, srv.url("/sort_products"), &[]).await;
    assert!(body.contains("There was an error. Please reload and try again."));

    let body = add_product(&client, &srv, "Widget").await;
    assert!(body.contains("Unable to add product."));
}

#[tokio::test]
async fn product_text_is_html_escaped() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    add_product(&client, &srv, "<script>alert(1)</script>").await;

    let (_, body) = get_text(&client, srv.url("/")).await;
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn static_pages_and_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for path in ["/about", "/contact", "/submit"] {
        let (status, _) = get_text(&client, srv.url(path)).await;
        assert_eq!(status, StatusCode::OK, "{path}");
    }

    let (status, body) = get_text(&client, srv.url("/definitely/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("The page you are looking for does not exist."));

    // Known path, wrong method.
    let (status, _) = get_text(&client, srv.url("/search_products")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = post_form(&client, srv.url("/health"), &[]).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("The page you are looking for does not exist."));
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_page() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let (status, body) = get_text(&client, srv.url("/about/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>About</h2>"));

    add_product(&client, &srv, "Slash Widget").await;
    let (status, body) = post_form(&client, srv.url("/search_products/"), &[("search_query", "slash")]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Slash Widget"));
}
