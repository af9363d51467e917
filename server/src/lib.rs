pub mod config;
pub mod error;

use anyhow::Result;
use axum::{extract::{Path, State}, http::HeaderMap, routing::{get, post}, Json, Router};
use matchcore::catalog::{load_catalog, Catalog, CatalogPaths, MetaFile};
use matchcore::{explain_match, rank_matches, validate_postings, JobPosting, MatchExplanation, MatchResult, TalentProfile};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Args, ServerConfig};
pub use error::ApiError;

#[derive(Deserialize)]
pub struct MatchRequest {
    pub profile: TalentProfile,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct AdhocMatchRequest {
    pub profile: TalentProfile,
    #[serde(default)]
    pub postings: Vec<JobPosting>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ExplainRequest {
    pub profile: TalentProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub took_s: f64,
    pub total_candidates: usize,
    pub results: Vec<MatchResult>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub catalog: Arc<RwLock<Catalog>>,
}

pub fn build_app(config: ServerConfig) -> Result<Router> {
    // Load the catalog at startup
    let catalog = load_catalog(&CatalogPaths::new(&config.catalog_dir))?;
    tracing::info!(
        postings = catalog.len(),
        open = catalog.meta.num_open,
        catalog = %config.catalog_dir.display(),
        "catalog loaded"
    );
    let cors = cors_layer(config.cors_allow_origin.as_deref());
    let state = AppState { config: Arc::new(config), catalog: Arc::new(RwLock::new(catalog)) };

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/match", post(match_handler))
        .route("/match/adhoc", post(adhoc_match_handler))
        .route("/match/:job_id/explain", post(explain_handler))
        .route("/postings/:job_id", get(posting_handler))
        .route("/catalog/reload", post(reload_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);
    Ok(app)
}

fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let origins: Vec<_> = allow_origin
        .unwrap_or("")
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
    }
}

/// Rank the profile against every open posting in the catalog.
pub async fn match_handler(State(state): State<AppState>, Json(req): Json<MatchRequest>) -> Json<MatchResponse> {
    let start = Instant::now();
    let postings = state.catalog.read().open_postings();
    let limit = state.config.effective_limit(req.limit);
    let results = rank_matches(&req.profile, &postings, limit);
    Json(MatchResponse { took_s: start.elapsed().as_secs_f64(), total_candidates: postings.len(), results })
}

/// Rank caller-supplied postings as given; eligibility is the caller's call.
pub async fn adhoc_match_handler(
    State(state): State<AppState>,
    Json(req): Json<AdhocMatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let start = Instant::now();
    validate_postings(&req.postings)?;
    let limit = state.config.effective_limit(req.limit);
    let results = rank_matches(&req.profile, &req.postings, limit);
    Ok(Json(MatchResponse { took_s: start.elapsed().as_secs_f64(), total_candidates: req.postings.len(), results }))
}

pub async fn explain_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(req): Json<ExplainRequest>,
) -> Result<Json<MatchExplanation>, ApiError> {
    let posting = state
        .catalog
        .read()
        .get(&job_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("posting {job_id}")))?;
    Ok(Json(explain_match(&req.profile, &posting)))
}

pub async fn posting_handler(State(state): State<AppState>, Path(job_id): Path<String>) -> Result<Json<JobPosting>, ApiError> {
    let posting = state.catalog.read().get(&job_id).cloned();
    posting.map(Json).ok_or_else(|| ApiError::NotFound(format!("posting {job_id}")))
}

async fn reload_handler(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<MetaFile>, ApiError> {
    authorize(&state, &headers)?;
    let catalog = load_catalog(&CatalogPaths::new(&state.config.catalog_dir))?;
    let meta = catalog.meta.clone();
    *state.catalog.write() = catalog;
    tracing::info!(postings = meta.num_postings, open = meta.num_open, "catalog reloaded");
    Ok(Json(meta))
}

fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let required = match &state.config.admin_token {
        Some(t) => t,
        None => return Err(ApiError::Unauthorized("ADMIN_TOKEN not set")),
    };
    let provided = headers.get("X-ADMIN-TOKEN").and_then(|v| v.to_str().ok()).unwrap_or("");
    if provided == required {
        Ok(())
    } else {
        Err(ApiError::Unauthorized("invalid admin token"))
    }
}
