//! stamboek-bootstrap — verify the role vocabulary and create the first
//! Administrator, so someone can log in to create everyone else.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stamboek_core::config::AppConfig;
use stamboek_core::error::AppError;
use stamboek_database::repositories::{RoleRepository, UserRepository};
use stamboek_entity::user::RoleName;
use stamboek_entity::user::model::CreateUser;

#[derive(Debug, Parser)]
#[command(
    name = "stamboek-bootstrap",
    about = "Seed the role vocabulary and create the first Administrator"
)]
struct Args {
    /// Email van de nieuwe Administrator
    #[arg(long)]
    email: String,

    /// Naam van de nieuwe Administrator
    #[arg(long)]
    name: String,

    /// Google-ID van de nieuwe Administrator
    #[arg(long)]
    google_id: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Args::parse()).await {
        eprintln!("Bootstrap failed: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let env = std::env::var("STAMBOEK_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;

    let pool = stamboek_database::connection::create_pool(&config.database).await?;
    stamboek_database::migration::run_migrations(&pool).await?;

    let roles = RoleRepository::new(pool.clone());
    for role in RoleName::ALL {
        roles.ensure(role.as_str()).await?;
    }

    let admin_role = roles
        .find_by_name(RoleName::Administrator.as_str())
        .await?
        .ok_or_else(|| AppError::internal("Administrator role missing after seeding"))?;

    let users = UserRepository::new(pool.clone());
    if users.find_by_email(&args.email).await?.is_some() {
        println!("Gebruiker {} bestaat al.", args.email);
        return Ok(());
    }

    let user = users
        .create(&CreateUser {
            email: args.email,
            name: args.name,
            google_id: args.google_id,
            role_id: admin_role.id,
        })
        .await?;

    println!(
        "Administrator {} ({}) is succesvol toegevoegd.",
        user.name, user.email
    );
    Ok(())
}
