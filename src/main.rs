//! Stamboek Server — family record keeping with Google login.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use stamboek_core::config::AppConfig;
use stamboek_core::error::AppError;

use stamboek_auth::login::{LoginFlow, UserDirectory};
use stamboek_auth::oauth::GoogleOAuthClient;
use stamboek_auth::session::SessionCodec;
use stamboek_database::repositories::{
    AnniversaryRepository, AnniversaryTypeRepository, FamilyRepository, PersonRepository,
    RelationRepository, RelationTypeRepository, RoleRepository, UserRepository,
};
use stamboek_service::agenda::AgendaService;

#[tokio::main]
async fn main() {
    let env = std::env::var("STAMBOEK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Stamboek v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = stamboek_database::connection::create_pool(&config.database).await?;
    stamboek_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let role_repo = Arc::new(RoleRepository::new(db_pool.clone()));
    let family_repo = Arc::new(FamilyRepository::new(db_pool.clone()));
    let person_repo = Arc::new(PersonRepository::new(db_pool.clone()));
    let anniversary_repo = Arc::new(AnniversaryRepository::new(db_pool.clone()));
    let anniversary_type_repo = Arc::new(AnniversaryTypeRepository::new(db_pool.clone()));
    let relation_repo = Arc::new(RelationRepository::new(db_pool.clone()));
    let relation_type_repo = Arc::new(RelationTypeRepository::new(db_pool.clone()));

    // ── Step 3: Initialize the auth core ─────────────────────────
    tracing::info!("Initializing authentication...");
    let codec = Arc::new(SessionCodec::new(&config.session));
    let oauth_client = Arc::new(GoogleOAuthClient::new(config.oauth.clone()));
    let login_flow = Arc::new(LoginFlow::new(
        oauth_client,
        Arc::clone(&user_repo) as Arc<dyn UserDirectory>,
        Arc::clone(&codec),
    ));

    // ── Step 4: Initialize services ──────────────────────────────
    let agenda = Arc::new(AgendaService::new(Arc::clone(&anniversary_repo)));

    // ── Step 5: Build and start the HTTP server ──────────────────
    let app_state = stamboek_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        codec,
        login_flow,
        user_repo,
        role_repo,
        family_repo,
        person_repo,
        anniversary_repo,
        anniversary_type_repo,
        relation_repo,
        relation_type_repo,
        agenda,
    };

    let app = stamboek_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Stamboek server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Stamboek server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
