//! The matching relay endpoint.
//!
//! Clients send query text three ways, all preserved from the original
//! service for client compatibility: a percent-encoded `text` header on
//! GET, a `text` query parameter on GET, or the raw body on POST. The
//! handler forwards the text to the search service, asks the decision
//! engine about every returned article, and re-serializes the response with
//! each article's `ismatch` flag filled in.

use axum::extract::{Query, State};
use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ServerError, ServerResult};
use crate::extract::extract_urls;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct CheckParams {
    #[serde(default)]
    pub text: Option<String>,
}

/// GET form: query text in the `text` header (percent-encoded, the legacy
/// transport) or the `text` query parameter.
pub async fn check_get(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<CheckParams>,
    headers: HeaderMap,
) -> ServerResult<Response> {
    let text = match headers.get("text") {
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| ServerError::BadRequest("text header is not valid ASCII".into()))?;
            unescape_query(raw)?
        }
        None => params.text.unwrap_or_default(),
    };

    run_check(&state, &text).await
}

/// POST form: the body is the query text.
pub async fn check_post(
    State(state): State<Arc<ServerState>>,
    body: String,
) -> ServerResult<Response> {
    run_check(&state, &body).await
}

/// Query-unescape a header value: `+` means space, `%XX` is percent-decoded.
fn unescape_query(raw: &str) -> ServerResult<String> {
    let spaced = raw.replace('+', " ");
    let decoded = percent_decode_str(&spaced)
        .decode_utf8()
        .map_err(|err| ServerError::BadRequest(format!("text header is not UTF-8: {err}")))?;
    Ok(decoded.into_owned())
}

async fn run_check(state: &ServerState, text: &str) -> ServerResult<Response> {
    if text.is_empty() {
        return Err(ServerError::BadRequest(
            "query text must not be empty".into(),
        ));
    }
    let query_urls = extract_urls(text);

    let mut search_response = state.search.search(text).await?;

    let edges = &mut search_response.data.list_articles.edges;
    let mut candidates: Vec<matcher::MatchCandidate> =
        edges.iter().map(|edge| edge.node.to_candidate()).collect();

    state
        .matcher
        .annotate(text, &query_urls, &mut candidates)?;

    for (edge, candidate) in edges.iter_mut().zip(candidates) {
        edge.node.is_match = candidate.is_match;
    }

    tracing::info!(
        articles = edges.len(),
        matches = edges.iter().filter(|e| e.node.is_match).count(),
        url_branch = !query_urls.is_empty(),
        "annotated search response"
    );

    let mut response = Json(search_response).into_response();
    let cache = format!("public,max-age={}", state.config.cache_max_age_secs);
    if let Ok(value) = HeaderValue::from_str(&cache) {
        response.headers_mut().insert(CACHE_CONTROL, value);
    }
    Ok(response)
}
