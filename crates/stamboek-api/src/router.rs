//! Route definitions for the Stamboek HTTP application.
//!
//! Routes are organized by domain and mounted at the root, matching the
//! browser-facing paths of the application (`/login`, `/auth`, `/logout`,
//! `/`, and the record collections).

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    Router::new()
        .merge(auth_routes())
        .merge(home_routes())
        .merge(family_routes())
        .merge(person_routes())
        .merge(anniversary_routes())
        .merge(relation_routes())
        .merge(user_routes())
        .merge(admin_routes())
        .merge(health_routes())
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Login flow: provider redirect, callback, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(handlers::auth::login))
        .route("/auth", get(handlers::auth::callback))
        .route("/logout", get(handlers::auth::logout))
}

/// Landing view with the agenda and denial flash
fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::home::home))
}

/// Family CRUD
fn family_routes() -> Router<AppState> {
    Router::new()
        .route("/families", get(handlers::family::list_families))
        .route("/families", post(handlers::family::create_family))
        .route("/families/{id}", get(handlers::family::get_family))
        .route("/families/{id}", put(handlers::family::update_family))
        .route("/families/{id}", delete(handlers::family::delete_family))
}

/// Person CRUD
fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/persons", get(handlers::person::list_persons))
        .route("/persons", post(handlers::person::create_person))
        .route("/persons/{id}", get(handlers::person::get_person))
        .route("/persons/{id}", put(handlers::person::update_person))
        .route("/persons/{id}", delete(handlers::person::delete_person))
}

/// Anniversary CRUD and the type vocabulary
fn anniversary_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/anniversaries",
            get(handlers::anniversary::list_anniversaries),
        )
        .route(
            "/anniversaries",
            post(handlers::anniversary::create_anniversary),
        )
        .route(
            "/anniversaries/{id}",
            put(handlers::anniversary::update_anniversary),
        )
        .route(
            "/anniversaries/{id}",
            delete(handlers::anniversary::delete_anniversary),
        )
        .route(
            "/anniversary-types",
            get(handlers::anniversary_type::list_anniversary_types),
        )
        .route(
            "/anniversary-types",
            post(handlers::anniversary_type::create_anniversary_type),
        )
        .route(
            "/anniversary-types/{id}",
            put(handlers::anniversary_type::update_anniversary_type),
        )
        .route(
            "/anniversary-types/{id}",
            delete(handlers::anniversary_type::delete_anniversary_type),
        )
}

/// Relation CRUD, search, and the type vocabulary
fn relation_routes() -> Router<AppState> {
    Router::new()
        .route("/relations", get(handlers::relation::list_relations))
        .route("/relations", post(handlers::relation::create_relation))
        .route(
            "/relations/search",
            post(handlers::relation::search_relations),
        )
        .route("/relations/{id}", put(handlers::relation::update_relation))
        .route(
            "/relations/{id}",
            delete(handlers::relation::delete_relation),
        )
        .route(
            "/relation-types",
            get(handlers::relation_type::list_relation_types),
        )
        .route(
            "/relation-types",
            post(handlers::relation_type::create_relation_type),
        )
        .route(
            "/relation-types/{id}",
            put(handlers::relation_type::update_relation_type),
        )
        .route(
            "/relation-types/{id}",
            delete(handlers::relation_type::delete_relation_type),
        )
}

/// User management (Administrator-only)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
        .route("/roles", get(handlers::user::list_roles))
}

/// Administrative ownership transfer (Administrator-only)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/change-owner",
            get(handlers::admin::change_owner_list),
        )
        .route("/admin/change-owner", post(handlers::admin::change_owner))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
