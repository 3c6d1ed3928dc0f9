use color_eyre::eyre::Result;
use expense_adapters::{
    config::Settings,
    password::Argon2PasswordHasher,
    persistence::PostgresUserStore,
    token::{JwtAuthConfig, JwtTokenIssuer},
};
use expense_api::{AuthService, configure_postgresql, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = Settings::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(&settings.database).await?;

    let user_store = PostgresUserStore::new(pg_pool);
    let password_hasher = Argon2PasswordHasher::default();
    let token_issuer = JwtTokenIssuer::new(JwtAuthConfig::from(&settings.jwt));

    let auth_service = AuthService::new(user_store, password_hasher, token_issuer);

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("Starting expense tracker auth API...");

    auth_service
        .run_standalone(listener, Some(settings.application.allowed_origins))
        .await?;

    Ok(())
}
