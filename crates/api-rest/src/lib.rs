//! # API REST
//!
//! REST API implementation for the NAMASTE disease lookup service.
//!
//! Handles:
//! - HTTP endpoints with axum (`/`, `/api/search`, `/api/chatbot`, `/health`)
//! - Static assets under `/static`
//! - OpenAPI/Swagger documentation
//!
//! Uses `api-shared` for response types and `namaste-core` for search and chatbot logic.

#![warn(rust_2018_idioms)]

pub mod page;

use api_shared::{
    ChatbotParams, ChatbotRes, ErrorRes, HealthRes, HealthService, SearchParams, SearchRes,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::get,
    Router,
};
use namaste_core::{ChatMessage, Chatbot, DiseaseCatalogue, SearchTerm};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
///
/// Everything here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    catalogue: Arc<DiseaseCatalogue>,
    chatbot: Arc<Chatbot>,
    index_page: Arc<str>,
}

impl AppState {
    pub fn new(
        catalogue: DiseaseCatalogue,
        chatbot: Chatbot,
        index_page: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
            chatbot: Arc::new(chatbot),
            index_page: index_page.into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, search, chatbot),
    components(schemas(HealthRes, SearchRes, ErrorRes, ChatbotRes))
)]
pub struct ApiDoc;

/// Build the application router.
///
/// `static_dir` is served under `/static`; missing files there answer 404.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/search", get(search))
        .route("/api/chatbot", get(chatbot))
        .nest_service("/static", ServeDir::new(static_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Entry page
#[axum::debug_handler]
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.index_page.to_string())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching records, possibly none", body = SearchRes),
        (status = 400, description = "Query parameter missing or empty", body = ErrorRes)
    )
)]
/// Search diseases by name or Ayurveda name
///
/// Case-insensitive substring match over both fields. Results keep catalogue order and are
/// not ranked or limited.
///
/// # Errors
/// Returns `400 Bad Request` with `{"error": "Query parameter required"}` if `q` is absent
/// or empty. A repeated `q` uses its first value.
#[axum::debug_handler]
async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchRes>, (StatusCode, Json<ErrorRes>)> {
    let params = SearchParams::from_pairs(&pairs);
    let term = match SearchTerm::new(params.q.unwrap_or_default()) {
        Ok(term) => term,
        Err(e) => {
            tracing::debug!("rejected search: {}", e);
            return Err((StatusCode::BAD_REQUEST, Json(ErrorRes::query_required())));
        }
    };

    let results = state
        .catalogue
        .search(&term)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(SearchRes { results }))
}

#[utoipa::path(
    get,
    path = "/api/chatbot",
    params(ChatbotParams),
    responses(
        (status = 200, description = "Canned chatbot reply", body = ChatbotRes)
    )
)]
/// Reply to a chatbot message
///
/// Always answers; an absent or empty message gets the fallback reply. A repeated `message`
/// uses its first value.
#[axum::debug_handler]
async fn chatbot(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ChatbotRes> {
    let params = ChatbotParams::from_pairs(&pairs);
    let message = ChatMessage::from(params.message);
    Json(ChatbotRes {
        response: state.chatbot.reply(&message).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use namaste_core::chatbot::{
        DIABETES_RESPONSE, FALLBACK_RESPONSE, HELP_RESPONSE, VATA_RESPONSE,
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    const SAMPLE: &str = "\
name,Ayurveda_Name,namaste
Diabetes Mellitus,madhumeha,NAM-DM-001
Hypertension,raktagata vata,NAM-HTN-002
Vata Disorder,vata vyadhi,NAM-VV-101
";

    fn app_with_static(static_dir: &Path) -> Router {
        let catalogue = DiseaseCatalogue::from_reader(SAMPLE.as_bytes()).unwrap();
        let state = AppState::new(catalogue, Chatbot::default(), "<h1>entry</h1>");
        router(state, static_dir)
    }

    fn app() -> Router {
        app_with_static(Path::new("does-not-exist"))
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = send(app, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_search_returns_matches_in_order() {
        let (status, body) = get_json(app(), "/api/search?q=VATA").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Hypertension", "Vata Disorder"]);
    }

    #[tokio::test]
    async fn test_search_record_shape() {
        let (_, body) = get_json(app(), "/api/search?q=madhu").await;
        assert_eq!(
            body,
            json!({"results": [{"name": "Diabetes Mellitus", "Ayurveda_Name": "madhumeha", "namaste": "NAM-DM-001"}]})
        );
    }

    #[tokio::test]
    async fn test_search_handles_encoded_spaces() {
        let (status, body) = get_json(app(), "/api/search?q=vata%20vyadhi").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_search_without_match_is_empty_200() {
        let (status, body) = get_json(app(), "/api/search?q=cholera").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"results": []}));
    }

    #[tokio::test]
    async fn test_search_empty_query_is_400() {
        let (status, body) = get_json(app(), "/api/search?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Query parameter required"}));
    }

    #[tokio::test]
    async fn test_search_missing_query_is_400() {
        let (status, body) = get_json(app(), "/api/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Query parameter required"}));
    }

    #[tokio::test]
    async fn test_chatbot_diabetes() {
        let (status, body) =
            get_json(app(), "/api/chatbot?message=Tell%20me%20about%20diabetes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": DIABETES_RESPONSE}));
    }

    #[tokio::test]
    async fn test_chatbot_vata_outranks_hypertension() {
        let (status, body) =
            get_json(app(), "/api/chatbot?message=raktagata%20vata%20hypertension").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], VATA_RESPONSE);
    }

    #[tokio::test]
    async fn test_chatbot_repeated_message_uses_first() {
        let (status, body) = get_json(app(), "/api/chatbot?message=diabetes&message=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], DIABETES_RESPONSE);
    }

    #[tokio::test]
    async fn test_search_repeated_query_uses_first() {
        let (status, body) = get_json(app(), "/api/search?q=madhu&q=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"][0]["name"], "Diabetes Mellitus");
        assert_eq!(body["results"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chatbot_help() {
        let (_, body) = get_json(app(), "/api/chatbot?message=what%20can%20you%20do").await;
        assert_eq!(body["response"], HELP_RESPONSE);
    }

    #[tokio::test]
    async fn test_chatbot_missing_message_gets_fallback() {
        let (status, body) = get_json(app(), "/api/chatbot").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn test_index_serves_entry_page() {
        let (status, body) = send(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"<h1>entry</h1>");
    }

    #[tokio::test]
    async fn test_static_assets_are_served() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("css")).unwrap();
        std::fs::write(temp.path().join("css/style.css"), "body {}").unwrap();

        let (status, body) = send(app_with_static(temp.path()), "/static/css/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"body {}");

        let (status, _) = send(app_with_static(temp.path()), "/static/js/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }
}
