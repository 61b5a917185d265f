//! HTTP routes
//!
//! - `GET /ping`   - liveness check, replies with a [`PingResponse`]
//! - `POST /echo`  - decodes an [`EchoRequest`], replies with an [`EchoResponse`]
//! - `GET /schema` - JSON Schema catalog of every shape

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::adapter::ShapeJson;
use crate::activations::{echo::Echo, health::Health};
use crate::shapes::{catalog, EchoRequest, EchoResponse, PingResponse};

/// Shared state for route handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub health: Health,
    pub echo: Echo,
}

/// Create an Axum router for the ping and echo endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handle_ping))
        .route("/echo", post(handle_echo))
        .route("/schema", get(handle_schema))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn handle_ping(State(state): State<AppState>) -> ShapeJson<PingResponse> {
    ShapeJson(state.health.ping())
}

async fn handle_echo(
    State(state): State<AppState>,
    ShapeJson(request): ShapeJson<EchoRequest>,
) -> ShapeJson<EchoResponse> {
    ShapeJson(state.echo.echo(request))
}

async fn handle_schema() -> Json<Value> {
    Json(catalog())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(AppState::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), 10000).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_echo(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/echo")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_ping_returns_pong() {
        let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();
        let (status, json) = send(test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"message": "pong"}));
    }

    #[tokio::test]
    async fn test_ping_uses_configured_message() {
        let app = router(AppState {
            health: Health::with_message("alive"),
            echo: Echo,
        });
        let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();
        let (_, json) = send(app, request).await;

        assert_eq!(json, json!({"message": "alive"}));
    }

    #[tokio::test]
    async fn test_echo_round_trip() {
        let (status, json) = send(test_app(), post_echo(r#"{"text": "hello"}"#)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"text": "hello"}));
    }

    #[tokio::test]
    async fn test_echo_wrong_type() {
        let (status, json) = send(test_app(), post_echo(r#"{"text": 123}"#)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["field"], "text");
        assert_eq!(json["error"]["reason"], "wrong_type");
    }

    #[tokio::test]
    async fn test_echo_rejected_on_get() {
        let request = Request::builder().uri("/echo").body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_schema_endpoint() {
        let request = Request::builder().uri("/schema").body(Body::empty()).unwrap();
        let (status, json) = send(test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["EchoRequest"]["properties"]["text"].is_object());
    }
}
