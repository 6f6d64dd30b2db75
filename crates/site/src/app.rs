//! Axum application wiring for the static preview server.

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, header},
    middleware::{self, Next},
    response::Response,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::mime;

/// Build the preview router serving files under `root`.
///
/// File serving is `ServeDir`'s default behavior (GET/HEAD, `index.html`
/// for directories, 404 for missing paths) plus two response tweaks layered
/// on top: unconditional cache-disabling headers, and pinned content types
/// for stylesheets and scripts.
pub fn build_app(root: PathBuf) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(set_no_cache))
                .layer(middleware::from_fn(pin_content_type)),
        )
}

/// Mark every response uncacheable, whatever its path or status.
///
/// Runs after the inner service has produced its default header set.
async fn set_no_cache(req: Request<Body>, next: Next) -> Response {
    let mut res = next.run(req).await;
    res.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate"),
    );
    res
}

/// Replace the inferred content type for `.css`/`.js` files.
///
/// Only successful responses are touched; error pages keep the inner
/// service's content type.
async fn pin_content_type(req: Request<Body>, next: Next) -> Response {
    let forced = mime::forced_content_type(req.uri().path());
    let mut res = next.run(req).await;
    if res.status().is_success() {
        if let Some(content_type) = forced {
            res.headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }
    res
}
