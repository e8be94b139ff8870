use crate::{
    AppState, change_password, get_me, health, invite_admin, invite_member, login, refresh,
    update_me,
};

use axum::{
    Router,
    routing::{get, post},
};
use http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = state.cors_allowed_origin.as_deref().and_then(cors_layer);

    let router = Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Token endpoints
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        // Caller's own identity
        .route("/me", get(get_me).patch(update_me))
        .route("/change-password", post(change_password))
        // Onboarding
        .route("/admins/invite", post(invite_admin))
        .route("/members/invite", post(invite_member))
        .with_state(state);

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    let origin = match HeaderValue::from_str(origin) {
        Ok(origin) => origin,
        Err(e) => {
            log::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
            return None;
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PATCH])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
    )
}
