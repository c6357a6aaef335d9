use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::views::pages;

pub async fn about() -> Html<String> {
    Html(pages::about())
}

pub async fn contact() -> Html<String> {
    Html(pages::contact())
}

/// Catch-all. `/about/` and friends are sent to the slash-less route with a
/// 308 so the method and form body survive; everything else is a 404 view.
pub async fn not_found(uri: Uri) -> Response {
    if let Some(target) = without_trailing_slash(&uri) {
        return Redirect::permanent(&target).into_response();
    }
    (StatusCode::NOT_FOUND, Html(pages::not_found())).into_response()
}

fn without_trailing_slash(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    Some(match uri.query() {
        Some(q) => format!("{trimmed}?{q}"),
        None => trimmed.to_string(),
    })
}
