//! Authentication check applied to every API route.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::SharedState;

/// Reject requests whose `access-token`, `client` or `uid` headers do not
/// match the required credentials, the way the real API answers.
pub async fn require_auth(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = {
        let state = state.read().await;
        match &state.required_credentials {
            None => true,
            Some(expected) => {
                let headers = request.headers();
                header_is(headers, "access-token", &expected.access_token)
                    && header_is(headers, "client", &expected.client)
                    && header_is(headers, "uid", &expected.uid)
            }
        }
    };

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "errors": ["You need to sign in or sign up before continuing."]
            })),
        )
            .into_response();
    }

    next.run(request).await
}

fn header_is(headers: &HeaderMap, name: &str, expected: &str) -> bool {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false)
}
