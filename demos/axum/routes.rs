use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use action_guard_rs::admin_auth::AuthOutcome;
use action_guard_rs::metadata::SiteMetadata;

use crate::guard::AppState;

pub async fn home() -> Html<&'static str> {
    Html(
        "<h1>Action guard</h1><p>POST with a <code>next-action</code> header to exercise the filter.</p>",
    )
}

pub async fn admin_login(State(state): State<AppState>, body: Bytes) -> Response {
    let outcome = match &state.admin {
        Some(admin) => admin.authenticate(&body),
        None => AuthOutcome::Failed,
    };

    let status =
        StatusCode::from_u16(outcome.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(outcome.body())).into_response()
}

pub async fn metadata(State(state): State<AppState>) -> Json<SiteMetadata> {
    Json(state.metadata.as_ref().clone())
}
