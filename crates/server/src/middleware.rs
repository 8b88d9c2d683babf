use axum::extract::Request;
use axum::response::Response;
use axum::middleware::Next;

/// Request ID injection middleware.
///
/// Honors an incoming `x-request-id` header, otherwise mints a UUID. The id
/// is stored in request extensions for handlers and echoed on the response
/// so upstream proxies can correlate log lines.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
