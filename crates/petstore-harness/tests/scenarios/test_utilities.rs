//! In-process pet store stub and dispatcher fakes shared by the scenario tests.

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Form, Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use parking_lot::Mutex;
use petstore_harness::{
    ApiResponse, Dispatch, Harness, HarnessConfig, HarnessError, HttpDispatcher, RequestSpec,
};
use reqwest::header::HeaderMap;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Default)]
pub struct StubState {
    pub pets: Mutex<HashMap<i64, Value>>,
    pub orders: Mutex<HashMap<i64, Value>>,
    pub users: Mutex<HashMap<String, Value>>,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

type SharedState = Arc<StubState>;

fn api_message(code: u16, message: impl Into<String>) -> Json<Value> {
    Json(json!({"code": code, "type": "unknown", "message": message.into()}))
}

fn not_found(what: &str) -> Response {
    (StatusCode::NOT_FOUND, api_message(404, format!("{what} not found"))).into_response()
}

// =============================================================================
// PET ROUTES
// =============================================================================

async fn put_pet(State(state): State<SharedState>, Json(pet): Json<Value>) -> Response {
    match pet["id"].as_i64() {
        Some(id) => {
            state.pets.lock().insert(id, pet.clone());
            Json(pet).into_response()
        }
        None => (StatusCode::BAD_REQUEST, api_message(400, "bad input")).into_response(),
    }
}

async fn find_by_status(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let status = params.get("status").cloned().unwrap_or_default();
    let pets: Vec<Value> = state
        .pets
        .lock()
        .values()
        .filter(|pet| pet["status"] == status.as_str())
        .cloned()
        .collect();
    Json(pets)
}

async fn find_by_tags(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let tag = params.get("tags").cloned().unwrap_or_default();
    let pets: Vec<Value> = state
        .pets
        .lock()
        .values()
        .filter(|pet| {
            pet["tags"]
                .as_array()
                .is_some_and(|tags| tags.iter().any(|t| t["name"] == tag.as_str()))
        })
        .cloned()
        .collect();
    Json(pets)
}

async fn update_pet_with_form(
    State(state): State<SharedState>,
    Path(pet_id): Path<i64>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let mut pets = state.pets.lock();
    match pets.get_mut(&pet_id) {
        Some(pet) => {
            if let Some(name) = fields.get("name") {
                pet["name"] = json!(name);
            }
            if let Some(status) = fields.get("status") {
                pet["status"] = json!(status);
            }
            api_message(200, pet_id.to_string()).into_response()
        }
        None => not_found("Pet"),
    }
}

async fn delete_pet(State(state): State<SharedState>, Path(pet_id): Path<i64>) -> Response {
    match state.pets.lock().remove(&pet_id) {
        Some(_) => api_message(200, pet_id.to_string()).into_response(),
        None => not_found("Pet"),
    }
}

// =============================================================================
// STORE ROUTES
// =============================================================================

async fn place_order(State(state): State<SharedState>, Json(order): Json<Value>) -> Response {
    match order["id"].as_i64() {
        Some(id) => {
            state.orders.lock().insert(id, order.clone());
            Json(order).into_response()
        }
        None => (StatusCode::BAD_REQUEST, api_message(400, "Invalid Order")).into_response(),
    }
}

async fn get_order(State(state): State<SharedState>, Path(order_id): Path<i64>) -> Response {
    match state.orders.lock().get(&order_id) {
        Some(order) => Json(order.clone()).into_response(),
        None => not_found("Order"),
    }
}

async fn delete_order(State(state): State<SharedState>, Path(order_id): Path<i64>) -> Response {
    match state.orders.lock().remove(&order_id) {
        Some(_) => api_message(200, order_id.to_string()).into_response(),
        None => not_found("Order"),
    }
}

// =============================================================================
// USER ROUTES
// =============================================================================

fn store_user(state: &StubState, user: Value) -> Option<String> {
    let username = user["username"].as_str()?.to_string();
    state.users.lock().insert(username.clone(), user);
    Some(username)
}

async fn create_user(State(state): State<SharedState>, Json(user): Json<Value>) -> Response {
    let id = user["id"].as_i64().unwrap_or_default();
    match store_user(&state, user) {
        Some(_) => api_message(200, id.to_string()).into_response(),
        None => (StatusCode::BAD_REQUEST, api_message(400, "no username")).into_response(),
    }
}

async fn create_users(State(state): State<SharedState>, Json(users): Json<Vec<Value>>) -> Response {
    for user in users {
        store_user(&state, user);
    }
    api_message(200, "ok").into_response()
}

async fn get_user(State(state): State<SharedState>, Path(username): Path<String>) -> Response {
    match state.users.lock().get(&username) {
        Some(user) => Json(user.clone()).into_response(),
        None => not_found("User"),
    }
}

async fn update_user(
    State(state): State<SharedState>,
    Path(username): Path<String>,
    Json(user): Json<Value>,
) -> Response {
    let id = user["id"].as_i64().unwrap_or_default();
    state.users.lock().insert(username, user);
    api_message(200, id.to_string()).into_response()
}

async fn delete_user(State(state): State<SharedState>, Path(username): Path<String>) -> Response {
    match state.users.lock().remove(&username) {
        Some(_) => api_message(200, username).into_response(),
        None => not_found("User"),
    }
}

async fn login(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let username = params.get("username").cloned().unwrap_or_default();
    let password = params.get("password").cloned().unwrap_or_default();
    let users = state.users.lock();
    match users.get(&username) {
        Some(user) if user["password"] == password.as_str() => {
            api_message(200, format!("logged in user session:{username}")).into_response()
        }
        _ => (
            StatusCode::BAD_REQUEST,
            api_message(400, "Invalid username/password supplied"),
        )
            .into_response(),
    }
}

async fn logout() -> Json<Value> {
    api_message(200, "ok")
}

// =============================================================================
// SERVER
// =============================================================================

async fn record_request(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, 1024 * 1024).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::PAYLOAD_TOO_LARGE.into_response(),
    };

    state.requests.lock().push(RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        content_type: parts
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn create_router(state: SharedState) -> Router {
    let api = Router::new()
        .route("/pet", post(put_pet).put(put_pet))
        .route("/pet/findByStatus", get(find_by_status))
        .route("/pet/findByTags", get(find_by_tags))
        .route("/pet/{petId}", post(update_pet_with_form).delete(delete_pet))
        .route("/store/order", post(place_order))
        .route("/store/order/{orderId}", get(get_order).delete(delete_order))
        .route("/user", post(create_user))
        .route("/user/createWithArray", post(create_users))
        .route("/user/createWithList", post(create_users))
        .route("/user/login", get(login))
        .route("/user/logout", get(logout))
        .route(
            "/user/{username}",
            get(get_user).put(update_user).delete(delete_user),
        );

    Router::new()
        .nest("/v2", api)
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state)
}

/// Pet store stub listening on an OS-assigned loopback port, serving under `/v2`.
pub struct TestServer {
    pub state: SharedState,
    port: u16,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let state = SharedState::default();
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let app = create_router(state.clone());

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Stub server stopped: {e}");
            }
        });

        Ok(TestServer {
            state,
            port,
            handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/v2", self.port)
    }

    pub fn harness(&self) -> Harness<HttpDispatcher> {
        Harness::new(HarnessConfig::new(self.base_url())).expect("stub config is valid")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request recorded")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Answers every request with a fixed status and remembers what it was asked.
pub struct RecordingDispatcher {
    status: u16,
    zero_status_calls: usize,
    pub requests: Mutex<Vec<RequestSpec>>,
}

impl RecordingDispatcher {
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            zero_status_calls: 0,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers the first `calls` requests with status 0, then `status`.
    pub fn zero_status_first(calls: usize, status: u16) -> Self {
        Self {
            zero_status_calls: calls,
            ..Self::with_status(status)
        }
    }

    pub fn sent(&self) -> Vec<RequestSpec> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Dispatch for RecordingDispatcher {
    async fn dispatch(&self, spec: &RequestSpec) -> Result<ApiResponse, HarnessError> {
        let mut requests = self.requests.lock();
        let status = if requests.len() < self.zero_status_calls {
            0
        } else {
            self.status
        };
        requests.push(spec.clone());
        Ok(ApiResponse::new(status, HeaderMap::new(), ""))
    }
}
