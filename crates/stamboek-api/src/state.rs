//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use stamboek_auth::login::LoginFlow;
use stamboek_auth::session::SessionCodec;
use stamboek_core::config::AppConfig;
use stamboek_service::agenda::AgendaService;

use stamboek_database::repositories::{
    AnniversaryRepository, AnniversaryTypeRepository, FamilyRepository, PersonRepository,
    RelationRepository, RelationTypeRepository, RoleRepository, UserRepository,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session cookie codec
    pub codec: Arc<SessionCodec>,
    /// Login flow (provider bridge + user directory + codec)
    pub login_flow: Arc<LoginFlow>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Role repository
    pub role_repo: Arc<RoleRepository>,
    /// Family repository
    pub family_repo: Arc<FamilyRepository>,
    /// Person repository
    pub person_repo: Arc<PersonRepository>,
    /// Anniversary repository
    pub anniversary_repo: Arc<AnniversaryRepository>,
    /// Anniversary type repository
    pub anniversary_type_repo: Arc<AnniversaryTypeRepository>,
    /// Relation repository
    pub relation_repo: Arc<RelationRepository>,
    /// Relation type repository
    pub relation_type_repo: Arc<RelationTypeRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Upcoming-events agenda service
    pub agenda: Arc<AgendaService>,
}
