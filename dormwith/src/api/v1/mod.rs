pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod router;

/// Shared fixtures for the v1 handler tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;

    use crate::api::state::AppState;
    use crate::catalog::MockCatalog;
    use crate::config::{AuthConfig, ChatConfig, Config, MatchingConfig, ServerConfig};

    pub fn state(api_keys: Vec<String>) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                api_keys,
            },
            auth: AuthConfig::default(),
            matching: MatchingConfig {
                seed_on_start: false,
            },
            chat: ChatConfig::default(),
        };

        let catalog = Arc::new(MockCatalog::new().unwrap());
        AppState::new(config, catalog).unwrap()
    }

    /// Open state with the matching buckets populated.
    pub fn seeded_state() -> AppState {
        let state = state(vec![]);
        state.matching.initialize().unwrap();
        state
    }

    pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn with_json(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        with_json("POST", uri, body)
    }

    pub fn put_json(uri: &str, body: &str) -> Request<Body> {
        with_json("PUT", uri, body)
    }

    pub fn patch_json(uri: &str, body: &str) -> Request<Body> {
        with_json("PATCH", uri, body)
    }
}
