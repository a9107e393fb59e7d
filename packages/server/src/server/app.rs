//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use firebase_auth::FirebaseAuth;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::auth::JwtService;
use crate::domains::reviews::GoogleReviewsService;
use crate::kernel::{BaseIdentityProvider, FirebaseAdapter};
use crate::server::middleware::require_auth;
use crate::server::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub identity_provider: Arc<dyn BaseIdentityProvider>,
    pub jwt_service: Arc<JwtService>,
    pub reviews: Arc<GoogleReviewsService>,
}

/// Build the Axum application router.
///
/// Initializes the Firebase trust root as part of assembly; invalid
/// provider credentials abort startup instead of failing per-request.
pub async fn build_app(pool: PgPool, config: &Config) -> Result<Router> {
    let project_id = config.firebase_project_id()?;
    let firebase = FirebaseAuth::connect(project_id.clone())
        .await
        .with_context(|| format!("Failed to initialize Firebase trust root for {project_id}"))?;
    let identity_provider: Arc<dyn BaseIdentityProvider> =
        Arc::new(FirebaseAdapter::new(Arc::new(firebase)));

    let jwt_service = Arc::new(JwtService::new(
        &config.secret_key,
        config.jwt_issuer.clone(),
        config.access_token_expire_minutes,
    ));

    let reviews = Arc::new(GoogleReviewsService::new(
        config.google_places_api_key.clone(),
        config.google_place_id.clone(),
    ));

    let state = AppState {
        db_pool: pool,
        identity_provider,
        jwt_service,
        reviews,
    };

    Ok(router(state, &config.allowed_origins))
}

/// Assemble the router for a prepared application state.
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    let public = Router::new()
        .route("/auth/firebase-signup", post(routes::auth::firebase_signup))
        .route("/auth/token", post(routes::auth::access_token))
        .route("/vendors", get(routes::vendors::list))
        .route("/vendors/featured", get(routes::vendors::featured))
        .route("/vendors/categories", get(routes::vendors::categories))
        .route("/vendors/localities", get(routes::vendors::localities))
        .route("/vendors/:vendor_id", get(routes::vendors::get))
        .route("/packages", get(routes::packages::list))
        .route("/packages/popular", get(routes::packages::popular))
        .route("/packages/:package_id", get(routes::packages::get))
        .route("/reviews", get(routes::reviews::list))
        .route("/reviews/business-rating", get(routes::reviews::business_rating));

    let protected = Router::new()
        .route(
            "/users/me",
            get(routes::users::me)
                .put(routes::users::update_me)
                .delete(routes::users::delete_me),
        )
        .route("/users/by-phone/:phone_number", get(routes::users::by_phone))
        .route(
            "/weddings",
            post(routes::weddings::create).get(routes::weddings::list),
        )
        .route(
            "/weddings/:wedding_id",
            get(routes::weddings::get)
                .put(routes::weddings::update)
                .delete(routes::weddings::delete),
        )
        .route("/cart", post(routes::cart::add).get(routes::cart::list))
        .route("/cart/summary", get(routes::cart::summary))
        .route(
            "/cart/:item_id",
            put(routes::cart::update).delete(routes::cart::remove),
        )
        .route("/guests", post(routes::guests::add).get(routes::guests::list))
        .route("/guests/statistics", get(routes::guests::statistics))
        .route(
            "/guests/:guest_id",
            put(routes::guests::update).delete(routes::guests::delete),
        )
        .route(
            "/guests/:guest_id/send-invitation",
            post(routes::guests::send_invitation),
        )
        .route(
            "/relationships",
            post(routes::relationships::create).get(routes::relationships::list),
        )
        .route("/relationships/pending", get(routes::relationships::pending))
        .route(
            "/relationships/:relationship_id",
            put(routes::relationships::update).delete(routes::relationships::delete),
        )
        .route(
            "/relationships/:relationship_id/respond",
            post(routes::relationships::respond),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::health_handler))
        .nest("/api/v1", public.merge(protected))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
