use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/static/"]
struct StaticAssets;

fn serve_asset(path: &str) -> Option<Response> {
    let content = <StaticAssets as Embed>::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.to_vec(),
        )
            .into_response(),
    )
}

/// GET / — the landing page.
pub async fn index() -> Response {
    serve_asset("index.html")
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "landing page missing").into_response())
}

/// GET /static/{*path} — embedded stylesheet, script and page.
pub async fn static_handler(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    serve_asset(path).unwrap_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())
}
