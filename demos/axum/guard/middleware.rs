use std::borrow::Cow;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use action_guard_rs::{ActionGuard, Rejection, RequestContext, Verdict};

pub async fn action_guard_middleware(
    State(guard): State<Arc<ActionGuard>>,
    request: Request,
    next: Next,
) -> Response {
    let verdict = {
        let headers = decoded_headers(request.headers());
        let context = RequestContext::from_headers(
            request.method().as_str(),
            headers.iter().map(|(name, value)| (*name, value.as_ref())),
        );
        guard.check(&context)
    };

    match verdict {
        Verdict::Allow => next.run(request).await,
        Verdict::Reject(rejection) => rejection_response(&rejection),
    }
}

/// Every header, including values with opaque (non-visible-ASCII) bytes,
/// which are decoded lossily so a marker can never be skipped.
fn decoded_headers(headers: &HeaderMap) -> Vec<(&str, Cow<'_, str>)> {
    headers
        .iter()
        .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
        .collect()
}

fn rejection_response(rejection: &Rejection) -> Response {
    let status = StatusCode::from_u16(rejection.status()).unwrap_or(StatusCode::FORBIDDEN);
    (status, Json(rejection.body())).into_response()
}
