//! Public tracking endpoints hit from inside phishing emails.
//!
//! The pixel and the click page must always render: a broken image or an
//! error page in the victim's browser would give the simulation away.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::error::Result;
use crate::services::tracking;
use crate::state::AppState;

/// 1x1 transparent PNG served as the tracking pixel.
const TRACKING_PIXEL: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0b, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60,
    0x00, 0x02, 0x00, 0x00, 0x05, 0x00, 0x01, 0x7a, 0x5e, 0xab, 0x3f, 0x00, 0x00, 0x00, 0x00,
    0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

const EDUCATION_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>This was a phishing simulation</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 4rem auto; padding: 0 1rem; }
    h1 { color: #c0392b; }
    li { margin: 0.5rem 0; }
  </style>
</head>
<body>
  <h1>You clicked a simulated phishing link</h1>
  <p>No harm done. This email was part of your company's security
  awareness training. A real attacker could have stolen your credentials
  or installed malware.</p>
  <p>Next time, check for these warning signs:</p>
  <ul>
    <li>An unexpected sender or a lookalike address</li>
    <li>Urgency and pressure to act immediately</li>
    <li>Links whose real destination does not match the text</li>
    <li>Requests for credentials or personal data</li>
  </ul>
  <p>Report suspicious emails instead of clicking them.</p>
</body>
</html>
"#;

pub fn tracking_routes(state: AppState) -> Router {
    Router::new()
        .route("/pixel/{token}", get(pixel))
        .route("/click/{token}", get(click))
        .route("/report/{token}", post(report))
        .with_state(state)
}

/// Open tracking. The pixel is served no matter what happens while
/// recording the open.
async fn pixel(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    if let Err(e) = tracking::track_open(&state.db, &token).await {
        tracing::warn!(error = %e, "Failed to track open");
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        TRACKING_PIXEL,
    )
        .into_response()
}

/// Click tracking. Always shows the educational page.
async fn click(State(state): State<AppState>, Path(token): Path<String>) -> Html<&'static str> {
    if let Err(e) = tracking::track_click(&state.db, &token).await {
        tracing::warn!(error = %e, "Failed to track click");
    }

    Html(EDUCATION_PAGE)
}

/// Report tracking. Unlike the in-mail endpoints this one is called by
/// the training UI, so an unknown token is a real 404.
async fn report(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<serde_json::Value>> {
    tracking::track_report(&state.db, &token).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Thank you for reporting this phishing attempt",
        "points": 100
    })))
}
