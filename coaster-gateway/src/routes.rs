//! Axum route table and handlers for the coaster API.
//!
//! `/coasters` serves `GET` and `POST`; item paths serve `GET` only. Every
//! other method on either, `HEAD` included, is answered with 405
//! `Method not allowed`.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{any, get},
    Router,
};
use coaster_core::Coaster;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    admin::{AdminCredential, ADMIN_PAGE},
    config::MAX_BODY_BYTES,
    error::GatewayError,
    random::pick_random,
    store::CoasterStore,
};

/// Name of the collection resource, the first path segment.
pub const COLLECTION: &str = "coasters";

/// Reserved item segment that redirects to a random record.
pub const RANDOM_SEGMENT: &str = "random";

const JSON_CONTENT_TYPE: &str = "application/json";

// ── Shared state ─────────────────────────────────────────────────────────────

/// Components injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<CoasterStore>,
    pub admin: Arc<AdminCredential>,
}

impl AppState {
    #[must_use]
    pub fn new(store: CoasterStore, admin: AdminCredential) -> Self {
        Self { store: Arc::new(store), admin: Arc::new(admin) }
    }
}

// ── Item path parsing ─────────────────────────────────────────────────────────

/// What an item path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRoute {
    /// `/coasters/random`.
    Random,
    /// `/coasters/{id}`. The segment may be empty (`/coasters/`).
    Id(String),
}

impl ItemRoute {
    /// Parse a request path.
    ///
    /// Splitting on `/` must give exactly three parts: the empty string before
    /// the leading slash, [`COLLECTION`], and one segment. Anything else is
    /// rejected, including trailing slashes after the segment and nested
    /// segments.
    ///
    /// # Errors
    /// Returns [`GatewayError::IncorrectPath`] for any other shape.
    pub fn parse(path: &str) -> Result<Self, GatewayError> {
        let parts: Vec<&str> = path.split('/').collect();
        match parts.as_slice() {
            ["", COLLECTION, RANDOM_SEGMENT] => Ok(Self::Random),
            ["", COLLECTION, id] => Ok(Self::Id((*id).to_owned())),
            _ => Err(GatewayError::IncorrectPath),
        }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/coasters",
            get(list_coasters)
                .post(create_coaster)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/coasters/",
            get(get_coaster).head(method_not_allowed).fallback(method_not_allowed),
        )
        .route(
            "/coasters/{*rest}",
            get(get_coaster).head(method_not_allowed).fallback(method_not_allowed),
        )
        .route("/admin", any(admin_page))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /coasters` — every stored record as a JSON array.
///
/// # Errors
/// Returns [`GatewayError::Encode`] if the records cannot be serialized.
pub async fn list_coasters(State(state): State<AppState>) -> Result<Response, GatewayError> {
    let coasters = state.store.list_all();
    json_response(&coasters)
}

/// `POST /coasters` — store a new record under a server-generated id.
///
/// Success is `200 OK` with an empty body.
///
/// # Errors
/// Returns [`GatewayError::UnsupportedMediaType`] unless the content type is
/// exactly `application/json`, [`GatewayError::BodyRead`] if the body cannot
/// be read, [`GatewayError::MalformedBody`] if it is not a coaster record, and
/// [`GatewayError::Core`] if no id can be generated.
pub async fn create_coaster(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<StatusCode, GatewayError> {
    let received = headers
        .get(header::CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    if received != JSON_CONTENT_TYPE {
        return Err(GatewayError::UnsupportedMediaType { received });
    }

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| GatewayError::BodyRead(e.to_string()))?;
    // A bare `null` document is well-formed and yields the zero record.
    let coaster = serde_json::from_slice::<Option<Coaster>>(&bytes)
        .map_err(GatewayError::MalformedBody)?
        .unwrap_or_default();

    let id = state.store.insert(coaster)?;
    info!(id = %id, "coaster created");
    Ok(StatusCode::OK)
}

/// `GET /coasters/{id}` and `GET /coasters/random`.
///
/// An id that matches nothing yields the zero-valued record with `200 OK`,
/// not a 404.
///
/// # Errors
/// Returns [`GatewayError::IncorrectPath`] for malformed paths,
/// [`GatewayError::EmptyStore`] for a random pick on an empty store, and
/// [`GatewayError::Encode`] if the record cannot be serialized.
pub async fn get_coaster(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, GatewayError> {
    match ItemRoute::parse(uri.path())? {
        ItemRoute::Random => redirect_to_random(&state.store),
        ItemRoute::Id(id) => {
            let coaster = state.store.get(&id).unwrap_or_default();
            json_response(&coaster)
        }
    }
}

/// `/admin` — fixed page behind basic authentication.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] on any credential failure.
pub async fn admin_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<&'static str>, GatewayError> {
    state.admin.verify(&headers)?;
    Ok(Html(ADMIN_PAGE))
}

async fn method_not_allowed() -> GatewayError {
    GatewayError::MethodNotAllowed
}

// ── Response helpers ──────────────────────────────────────────────────────────

fn json_response<T: Serialize>(value: &T) -> Result<Response, GatewayError> {
    let body = serde_json::to_vec(value).map_err(GatewayError::Encode)?;
    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}

fn redirect_to_random(store: &CoasterStore) -> Result<Response, GatewayError> {
    let ids = store.ids();
    let target = pick_random(&ids, &mut rand::thread_rng()).ok_or(GatewayError::EmptyStore)?;
    let location = format!("/{COLLECTION}/{target}");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
