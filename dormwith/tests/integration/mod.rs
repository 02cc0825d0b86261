// Common test utilities for integration tests
use std::sync::{Arc, Once};

use axum::body::Body;
use axum::http::Request;

use dormwith::api::AppState;
use dormwith::catalog::MockCatalog;
use dormwith::config::{AuthConfig, ChatConfig, Config, MatchingConfig, ServerConfig};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// App state over the mock catalog. Matching lists are seeded when `seed` is set.
pub fn app_state(api_keys: Vec<String>, seed: bool) -> AppState {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            api_keys,
        },
        auth: AuthConfig::default(),
        matching: MatchingConfig {
            seed_on_start: seed,
        },
        chat: ChatConfig::default(),
    };
    let catalog = Arc::new(MockCatalog::new().expect("mock catalog"));
    let state = AppState::new(config, catalog).expect("app state");
    if seed {
        state.matching.initialize().expect("seed matching");
    }
    state
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

// Re-export commonly used crates for convenience
pub use serial_test::serial;
