use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{info, warn};
use uuid::Uuid;

use climate_pledge::{
    build_impact_summary, build_share_content, builtin_catalog, Action, ActionCatalog,
    CommunityStats, CommunityStatsService, DatabaseConfig, DatabaseManager, ImpactSummary,
    PledgeRepository, PledgeStore, ProfileRepository, ShareContent, UserProfile,
};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ActionCatalog>,
    pub pledges: PledgeRepository,
    pub profiles: ProfileRepository,
    pub stats: CommunityStatsService,
    pub base_url: String,
}

// API types
#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct CatalogResponse {
    pub catalog: ActionCatalog,
    pub actions_by_category: HashMap<String, Vec<Action>>,
}

#[derive(Serialize, Deserialize)]
pub struct SelectionResponse {
    pub user_id: Uuid,
    pub action_ids: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SaveSelectionRequest {
    pub action_ids: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "pledge_server=info,tower_http=debug".to_string()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Database connection
    let manager = DatabaseManager::new(DatabaseConfig::default()).await?;
    manager.verify_schema().await?;

    // Catalog: YAML override if configured, built-in otherwise
    let catalog = match std::env::var("CATALOG_PATH") {
        Ok(path) => {
            info!("Loading action catalog from {}", path);
            ActionCatalog::load_from_file(std::path::Path::new(&path))?
        }
        Err(_) => builtin_catalog(),
    };
    info!(
        "Catalog loaded: {} categories, {} actions",
        catalog.category_count(),
        catalog.action_count()
    );

    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    // Create application state
    let app_state = AppState {
        catalog: Arc::new(catalog),
        pledges: manager.pledge_repository(),
        profiles: manager.profile_repository(),
        stats: manager.stats_service(),
        base_url,
    };

    // Build our application with routes
    let app = create_router(app_state);

    // Determine port
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(state: AppState) -> Router {
    Router::new()
        // API routes
        .route("/api/health", get(health_check))
        .route("/api/catalog", get(get_catalog))
        .route("/api/stats", get(get_stats))
        .route("/api/pledges/:user_id", get(get_pledges).put(put_pledges))
        .route("/api/impact/:user_id", get(get_impact))
        .route("/api/impact/:user_id/share", get(get_share))
        .route("/api/profiles", post(create_profile))
        .route("/api/profiles/:user_id", get(get_profile))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        // Serve static files (landing page assets) for everything else
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}

// Health check endpoint
async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::ok("OK".to_string()))
}

// Full catalog, plus the grouped-by-category shape the pledge page uses
async fn get_catalog(State(state): State<AppState>) -> Json<ApiResponse<CatalogResponse>> {
    Json(ApiResponse::ok(CatalogResponse {
        catalog: (*state.catalog).clone(),
        actions_by_category: state.catalog.actions_by_category(),
    }))
}

// Community-wide statistics; the service degrades to fallback figures on
// database failure, so this handler never errors
async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<CommunityStats>> {
    let stats = state.stats.get_stats(&state.catalog).await;
    Json(ApiResponse::ok(stats))
}

// Current pledge selection for a user
async fn get_pledges(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SelectionResponse>>, StatusCode> {
    let user_id = parse_user_id(&user_id)?;

    match state.pledges.get_selection(user_id).await {
        Ok(selection) => Ok(Json(ApiResponse::ok(SelectionResponse {
            user_id,
            action_ids: selection.sorted_ids(),
        }))),
        Err(e) => {
            warn!("Failed to load selection for {}: {}", user_id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// Full-replacement save of a user's selection. The whole current set is
// persisted on every save; concurrent saves resolve last-write-wins.
async fn put_pledges(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<SaveSelectionRequest>,
) -> Result<Json<ApiResponse<SelectionResponse>>, StatusCode> {
    let user_id = parse_user_id(&user_id)?;
    let selection = request.action_ids.into_iter().collect();

    match state.pledges.replace_selection(user_id, &selection).await {
        Ok(()) => Ok(Json(ApiResponse::ok(SelectionResponse {
            user_id,
            action_ids: selection.sorted_ids(),
        }))),
        Err(e) => {
            warn!("Failed to save selection for {}: {}", user_id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// Impact summary for a user's stored selection. Unknown users read as an
// empty selection and yield the zero summary, never an error.
async fn get_impact(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ImpactSummary>>, StatusCode> {
    let user_id = parse_user_id(&user_id)?;

    match state.pledges.get_selection(user_id).await {
        Ok(selection) => {
            let summary = build_impact_summary(&state.catalog, &selection);
            Ok(Json(ApiResponse::ok(summary)))
        }
        Err(e) => {
            warn!("Failed to load selection for {}: {}", user_id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// Share text and social intent links for a user's current impact
async fn get_share(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ShareContent>>, StatusCode> {
    let user_id = parse_user_id(&user_id)?;

    let selection = match state.pledges.get_selection(user_id).await {
        Ok(selection) => selection,
        Err(e) => {
            warn!("Failed to load selection for {}: {}", user_id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let summary = build_impact_summary(&state.catalog, &selection);
    match build_share_content(&summary, &state.base_url) {
        Ok(content) => Ok(Json(ApiResponse::ok(content))),
        Err(e) => {
            warn!("Failed to build share content: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// Create (or idempotently re-create) a user profile
async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<Json<ApiResponse<UserProfile>>, StatusCode> {
    let user_id = request.id.unwrap_or_else(Uuid::new_v4);

    match state
        .profiles
        .create_profile(user_id, &request.name, request.email.as_deref())
        .await
    {
        Ok(profile) => Ok(Json(ApiResponse::ok(profile))),
        Err(e) => {
            warn!("Failed to create profile: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

async fn get_profile(
    Path(user_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserProfile>>, StatusCode> {
    let user_id = parse_user_id(&user_id)?;

    match state.profiles.get_profile(user_id).await {
        Ok(Some(profile)) => Ok(Json(ApiResponse::ok(profile))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            warn!("Failed to load profile {}: {}", user_id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn parse_user_id(raw: &str) -> Result<Uuid, StatusCode> {
    Uuid::parse_str(raw).map_err(|_| StatusCode::BAD_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert!(parse_user_id("not-a-uuid").is_err());
        assert!(parse_user_id("5f2a1d1a-9a0f-4f6e-8c8a-0a4c2f9b1e77").is_ok());
    }

    #[test]
    fn test_api_response_envelope() {
        let response = ApiResponse::ok(42);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json["error"].is_null());
    }
}
