#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use souschef::config::{AppConfig, COMPLETION_MODEL, IMAGE_MODEL, IMAGE_SIZE};
use souschef::server::build_router;
use souschef::util::AppState;

/// Utility module for the endpoint integration tests.
///
/// `spawn_app` runs the real router bound to an ephemeral local port and
/// returns a `TestApp` with convenience helpers; `UpstreamStub` stands in for
/// one of the upstream APIs with a canned response, counting calls and
/// capturing request bodies.
///
/// Configuration is injected as an explicit `AppConfig` (no process
/// environment involved), so tests can run in parallel.
pub struct TestApp {
    pub base_url: String,
    pub addr: SocketAddr,
    join: JoinHandle<()>,
    client: reqwest::Client,
}

impl TestApp {
    /// Create a reqwest client with sensible defaults for tests.
    fn make_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed building reqwest client")
    }

    /// Perform a GET relative to the app base URL.
    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
    }

    /// Perform a POST with JSON body.
    pub async fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .header(http::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.join.abort();
    }
}

/// Spawn the application router on an ephemeral port with the given config.
pub async fn spawn_app(config: AppConfig) -> TestApp {
    let app = build_router(AppState::new(config));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let base_url = format!("http://{}", addr);
    let server = axum::serve(listener, app.into_make_service());

    let join = tokio::spawn(async move {
        if let Err(e) = server.await {
            eprintln!("Test app error: {e:?}");
        }
    });

    TestApp {
        base_url,
        addr,
        join,
        client: TestApp::make_client(),
    }
}

/// Build a test configuration pointing both upstreams at the given bases.
///
/// Port 9 (discard) makes an accidentally-contacted upstream fail fast.
pub fn test_config(
    completion_base_url: &str,
    image_base_url: &str,
    image_api_key: Option<&str>,
) -> AppConfig {
    AppConfig {
        completion_api_key: "gsk-test-upstream".to_string(),
        completion_base_url: completion_base_url.trim_end_matches('/').to_string(),
        completion_model: COMPLETION_MODEL.to_string(),
        image_api_key: image_api_key.map(str::to_string),
        image_base_url: image_base_url.trim_end_matches('/').to_string(),
        image_model: IMAGE_MODEL.to_string(),
        image_size: IMAGE_SIZE.to_string(),
        port: 0,
    }
}

/// A dummy base URL for the upstream a test never contacts.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:9";

/// Canned response served by an `UpstreamStub`.
#[derive(Clone)]
pub struct StubResponse {
    pub status: http::StatusCode,
    pub body: String,
    pub content_type: &'static str,
}

impl StubResponse {
    pub fn json(status: http::StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "application/json",
        }
    }

    pub fn text(status: http::StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "text/plain",
        }
    }
}

struct StubState {
    response: StubResponse,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
}

/// A stand-in for one upstream API: serves a canned response on a single
/// route, counting calls and capturing the JSON request bodies it receives.
pub struct UpstreamStub {
    base_url: String,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<serde_json::Value>>>,
    shutdown: Arc<Mutex<Option<oneshot::Sender<()>>>>,
}

impl UpstreamStub {
    pub async fn start(path: &str, response: StubResponse) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(StubState {
            response,
            calls: calls.clone(),
            requests: requests.clone(),
        });

        let router = Router::new()
            .route(path, post(stub_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub upstream");
        let addr = listener.local_addr().expect("stub upstream local addr");
        let (tx, rx) = oneshot::channel::<()>();

        let server = axum::serve(listener, router.into_make_service());
        tokio::spawn(async move {
            tokio::select! {
                res = server => {
                    if let Err(err) = res {
                        eprintln!("Stub upstream error: {err:?}");
                    }
                }
                _ = rx => {}
            }
        });

        UpstreamStub {
            base_url: format!("http://{}", addr),
            calls,
            requests,
            shutdown: Arc::new(Mutex::new(Some(tx))),
        }
    }

    pub fn url(&self) -> String {
        self.base_url.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn take_requests(&self) -> Vec<serde_json::Value> {
        let mut guard = self.requests.lock().expect("lock stub requests");
        guard.drain(..).collect()
    }
}

impl Drop for UpstreamStub {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.shutdown.lock() {
            if let Some(tx) = guard.take() {
                let _ = tx.send(());
            }
        }
    }
}

async fn stub_handler(
    State(state): State<Arc<StubState>>,
    Json(body): Json<serde_json::Value>,
) -> axum::response::Response {
    state.calls.fetch_add(1, Ordering::SeqCst);
    if let Ok(mut guard) = state.requests.lock() {
        guard.push(body);
    }

    let resp = &state.response;
    (
        resp.status,
        [(http::header::CONTENT_TYPE, resp.content_type)],
        resp.body.clone(),
    )
        .into_response()
}

/// Wrap model output in a minimal Chat Completions envelope.
pub fn completion_envelope(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// A recipe in the documented schema, top-level keys in schema order and
/// deliberately not alphabetical, so ordering assertions are meaningful.
pub const EXAMPLE_RECIPE: &str = r#"{
  "recipe_name": "Classic Pancakes",
  "servings": 4,
  "prep_time": "10 minutes",
  "cook_time": "15 minutes",
  "total_time": "25 minutes",
  "ingredients": [
    "2 eggs",
    "1 cup flour",
    "1 cup milk"
  ],
  "instructions": [
    {
      "step": 1,
      "title": "Mix the batter",
      "details": [
        "Whisk the eggs and milk together.",
        "Fold in the flour until just combined."
      ]
    },
    {
      "step": 2,
      "title": "Cook the pancakes",
      "details": [
        "Ladle batter onto a hot greased pan.",
        "Flip once bubbles form and cook until golden."
      ]
    }
  ],
  "tips_and_variations": [
    "Rest the batter for 10 minutes for fluffier pancakes.",
    "Add a pinch of cinnamon for extra flavor."
  ],
  "nutrition_info_per_serving": {
    "calories": "220",
    "protein": "9g",
    "fat": "6g",
    "saturated_fat": "2g",
    "cholesterol": "95mg",
    "sodium": "180mg",
    "carbohydrates": "32g",
    "fiber": "1g",
    "sugar": "4g"
  }
}"#;
