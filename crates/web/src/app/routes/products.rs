use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension},
    response::Html,
    Form,
};

use discover_products::{CatalogQuery, Listing, SearchTerm};

use crate::app::dto::{AddProductForm, SearchForm};
use crate::app::services::AppServices;
use crate::views::{banner, pages, Banner};

/// Banners for the two non-row outcomes of a listing route.
struct ListingBanners {
    failed: Banner,
    empty: Banner,
}

const INDEX: ListingBanners = ListingBanners {
    failed: banner::INDEX_FAILED,
    empty: banner::INDEX_EMPTY,
};

const SEARCH: ListingBanners = ListingBanners {
    failed: banner::QUERY_FAILED,
    empty: banner::SEARCH_EMPTY,
};

const SORT: ListingBanners = ListingBanners {
    failed: banner::QUERY_FAILED,
    empty: banner::SORT_EMPTY,
};

fn render_listing(listing: &Listing, banners: &ListingBanners, search: Option<&str>) -> Html<String> {
    let banner = match listing {
        Listing::Failed => Some(banners.failed),
        Listing::Empty => Some(banners.empty),
        Listing::Products(_) => None,
    };
    Html(pages::index(banner, listing, search))
}

pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    let listing = services.listing(&CatalogQuery::All).await;
    render_listing(&listing, &INDEX, None)
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Html<String> {
    let Form(body) = match form {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("malformed search request: {e}");
            return render_listing(&Listing::Failed, &SEARCH, None);
        }
    };

    let term = SearchTerm::new(&body.search_query);
    let listing = services.listing(&CatalogQuery::Search(term.clone())).await;
    render_listing(&listing, &SEARCH, Some(term.as_str()))
}

pub async fn sort_products(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    let listing = services.listing(&CatalogQuery::SortedByName).await;
    render_listing(&listing, &SORT, None)
}

pub async fn submit_page() -> Html<String> {
    Html(pages::submit(None))
}

pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    form: Result<Form<AddProductForm>, FormRejection>,
) -> Html<String> {
    let Form(body) = match form {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("malformed product submission: {e}");
            return Html(pages::submit(Some(banner::ADD_FAILED)));
        }
    };

    let banner = match services.add_product(body).await {
        Ok(_) => banner::ADD_SUCCEEDED,
        Err(_) => banner::ADD_FAILED,
    };
    Html(pages::submit(Some(banner)))
}
