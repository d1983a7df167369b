//! Shared test helpers for integration tests.
//!
//! Requires a PostgreSQL database reachable at the URL in
//! `tests/fixtures/test_config.toml`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use stamboek_api::state::AppState;
use stamboek_auth::login::{LoginFlow, UserDirectory};
use stamboek_auth::oauth::{IdentityProvider, VerifiedIdentity};
use stamboek_auth::session::SessionCodec;
use stamboek_core::config::AppConfig;
use stamboek_core::result::AppResult;
use stamboek_database::repositories::{
    AnniversaryRepository, AnniversaryTypeRepository, FamilyRepository, PersonRepository,
    RelationRepository, RelationTypeRepository, RoleRepository, UserRepository,
};
use stamboek_entity::session::Session;
use stamboek_entity::user::RoleName;
use stamboek_service::agenda::AgendaService;

/// Identity provider stub: every code exchange yields the fixed identity.
pub struct StubProvider {
    identity: VerifiedIdentity,
}

#[async_trait::async_trait]
impl IdentityProvider for StubProvider {
    fn authorize_url(&self, state: &str) -> AppResult<String> {
        Ok(format!("https://provider.test/authorize?state={state}"))
    }

    async fn exchange_code(&self, _code: &str) -> AppResult<VerifiedIdentity> {
        Ok(self.identity.clone())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Session codec, for minting cookies directly
    pub codec: Arc<SessionCodec>,
}

impl TestApp {
    /// Create a test application whose provider verifies `ghost@example.com`.
    pub async fn new() -> Self {
        Self::with_identity(VerifiedIdentity {
            email: "ghost@example.com".to_string(),
            subject: "sub-ghost".to_string(),
            name: Some("Ghost".to_string()),
        })
        .await
    }

    /// Create a test application with a stubbed provider identity.
    pub async fn with_identity(identity: VerifiedIdentity) -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config")
            .expect("Failed to load test config");

        let db_pool = stamboek_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        stamboek_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let role_repo = Arc::new(RoleRepository::new(db_pool.clone()));
        let family_repo = Arc::new(FamilyRepository::new(db_pool.clone()));
        let person_repo = Arc::new(PersonRepository::new(db_pool.clone()));
        let anniversary_repo = Arc::new(AnniversaryRepository::new(db_pool.clone()));
        let anniversary_type_repo = Arc::new(AnniversaryTypeRepository::new(db_pool.clone()));
        let relation_repo = Arc::new(RelationRepository::new(db_pool.clone()));
        let relation_type_repo = Arc::new(RelationTypeRepository::new(db_pool.clone()));

        let codec = Arc::new(SessionCodec::new(&config.session));
        let login_flow = Arc::new(LoginFlow::new(
            Arc::new(StubProvider { identity }),
            Arc::clone(&user_repo) as Arc<dyn UserDirectory>,
            Arc::clone(&codec),
        ));
        let agenda = Arc::new(AgendaService::new(Arc::clone(&anniversary_repo)));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            codec: Arc::clone(&codec),
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

        let router = stamboek_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
            codec,
        }
    }

    /// Clean all test data. Role and anniversary-type seeds stay.
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "relations",
            "relation_types",
            "anniversaries",
            "persons",
            "families",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {table}");
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a user with the given (seeded) role and return their id.
    pub async fn create_user(&self, email: &str, name: &str, role: &str) -> i64 {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (email, name, google_id, role_id) \
             VALUES ($1, $2, $3, (SELECT id FROM roles WHERE name = $4)) RETURNING id",
        )
        .bind(email)
        .bind(name)
        .bind(format!("sub-{email}"))
        .bind(role)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Insert a family owned by the given user and return its id.
    pub async fn create_family_owned_by(&self, family_name: &str, owner_id: i64) -> i64 {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO families \
             (family_name, street, house_number, postal_code, city, created_by) \
             VALUES ($1, 'Dorpsstraat', '1', '1234 AB', 'Ons Dorp', $2) RETURNING id",
        )
        .bind(family_name)
        .bind(owner_id)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create test family");

        id
    }

    /// Mint a session cookie header value for the given user.
    pub fn session_cookie(&self, user_id: i64, email: &str, role: RoleName) -> String {
        let token = self
            .codec
            .sign(&Session {
                user_id,
                email: email.to_string(),
                name: email.to_string(),
                role,
                google_id: format!("sub-{email}"),
            })
            .expect("Failed to sign session");

        format!("{}={}", self.config.session.cookie_name, token)
    }

    /// Make an HTTP request to the test app. The body, when present, is
    /// form-urlencoded (the application is form-driven).
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        form_body: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if form_body.is_some() {
            req = req.header("Content-Type", "application/x-www-form-urlencoded");
        }
        if let Some(cookie) = cookie {
            req = req.header("Cookie", cookie);
        }

        let req = req
            .body(Body::from(form_body.unwrap_or_default().to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Parsed JSON body (Null for redirects)
    pub body: Value,
}

impl TestResponse {
    /// The Location header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }

    /// All Set-Cookie header values.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(String::from)
            .collect()
    }

    /// The value of a just-set cookie, if any.
    pub fn cookie_value(&self, name: &str) -> Option<String> {
        self.set_cookies().iter().find_map(|c| {
            let (pair, _) = c.split_once(';').unwrap_or((c.as_str(), ""));
            let (cookie_name, value) = pair.split_once('=')?;
            (cookie_name == name).then(|| value.to_string())
        })
    }
}
