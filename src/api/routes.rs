//! API Routes
//!
//! Configures the Axum router with all recommendation service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, mood_recommendations_handler, moods_handler, platforms_handler,
    recommendations_handler, root_handler, stats_handler, system_info_handler,
    user_preferences_handler, AppState,
};
use crate::error::panic_response;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Service information
/// - `GET /recommendations/` - Per-user recommendations (cached)
/// - `GET /recommendations/mood/` - Mood-based recommendations
/// - `GET /moods` - Supported moods
/// - `GET /platforms` - Supported video platforms
/// - `GET /system/info` - System information
/// - `GET /cache/stats` - Cache statistics
/// - `GET /user/preferences` - Profile of a known user
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
/// - Panics: Reported as a 500 JSON error
pub fn create_router(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .route("/", get(root_handler))
            .route("/recommendations/", get(recommendations_handler))
            .route("/recommendations/mood/", get(mood_recommendations_handler))
            .route("/moods", get(moods_handler))
            .route("/platforms", get(platforms_handler))
            .route("/system/info", get(system_info_handler))
            .route("/cache/stats", get(stats_handler))
            .route("/user/preferences", get(user_preferences_handler))
            .route("/health", get(health_handler))
            .with_state(state),
    )
}

fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationService;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(RecommendationService::default()))
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_info_endpoints() {
        for uri in ["/", "/moods", "/platforms", "/system/info", "/cache/stats"] {
            assert_eq!(status_of(uri).await, StatusCode::OK, "GET {}", uri);
        }
    }

    #[tokio::test]
    async fn test_recommendations_endpoint() {
        assert_eq!(
            status_of("/recommendations/?user_id=1&limit=3").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_recommendations_missing_user_id() {
        assert_eq!(
            status_of("/recommendations/").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_user_preferences_endpoint() {
        assert_eq!(
            status_of("/user/preferences?username=demo_user").await,
            StatusCode::OK
        );
        assert_eq!(
            status_of("/user/preferences?username=ghost").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500() {
        async fn failing() -> &'static str {
            panic!("generator exploded")
        }

        let app = with_middleware(Router::new().route("/fail", get(failing)));
        let response = app
            .oneshot(Request::builder().uri("/fail").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["error"],
            "An internal server error occurred. Please try again."
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        assert_eq!(status_of("/get/anything").await, StatusCode::NOT_FOUND);
    }
}
