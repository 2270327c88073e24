//! News proxy endpoints
//!
//! Each handler reads its query parameters with lenient defaults, delegates
//! to the NewsAPI client, and mirrors the envelope's status onto the HTTP
//! response. Malformed numeric parameters never produce a client error.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use newswire_core::{
    positive_or, Envelope, DEFAULT_CATEGORY, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_QUERY,
};

use crate::AppState;

/// Query parameters for the everything feed
///
/// Paging fields stay strings so that malformed numbers fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct AllNewsQuery {
    pub q: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Query parameters for category headlines
#[derive(Debug, Deserialize)]
pub struct HeadlinesQuery {
    pub category: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Query parameters for country headlines; accepted but not forwarded
#[derive(Debug, Deserialize)]
pub struct CountryQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/all-news", get(all_news))
        .route("/top-headlines", get(top_headlines))
        .route("/country/{iso}", get(country_headlines))
}

/// GET /all-news - search the everything feed
async fn all_news(
    State(state): State<AppState>,
    Query(params): Query<AllNewsQuery>,
) -> Response {
    let page = positive_or(params.page.as_deref(), DEFAULT_PAGE);
    let page_size = positive_or(params.page_size.as_deref(), DEFAULT_PAGE_SIZE);
    let q = params
        .q
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());

    envelope_response(state.newsapi.everything(&q, page, page_size).await)
}

/// GET /top-headlines - category headlines, English only
async fn top_headlines(
    State(state): State<AppState>,
    Query(params): Query<HeadlinesQuery>,
) -> Response {
    let page = positive_or(params.page.as_deref(), DEFAULT_PAGE);
    let page_size = positive_or(params.page_size.as_deref(), DEFAULT_PAGE_SIZE);
    let category = params
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    envelope_response(state.newsapi.top_headlines(&category, page, page_size).await)
}

/// GET /country/{iso} - top headlines for a country
///
/// `page`/`pageSize` are accepted for parity with the other routes but the
/// upstream country call is unpaged, so they are dropped here. The `iso`
/// segment is passed through unvalidated; a bad code surfaces as the usual
/// upstream-failure envelope.
async fn country_headlines(
    State(state): State<AppState>,
    Path(iso): Path<String>,
    Query(_params): Query<CountryQuery>,
) -> Response {
    envelope_response(state.newsapi.country_headlines(&iso).await)
}

/// Mirror the envelope's status onto the HTTP response
fn envelope_response(envelope: Envelope) -> Response {
    let code =
        StatusCode::from_u16(envelope.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (code, Json(envelope)).into_response()
}
