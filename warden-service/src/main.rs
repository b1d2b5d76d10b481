use std::sync::Arc;

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warden::{
    AuthServer, AuthService, Clock, ConfiguredHasher, DEMO_ACCOUNTS, HashMapSessionStore,
    HashMapUserStore, SystemClock, TracingSecurityLog, adapters::config::WardenSettings,
    seed_accounts, shutdown_signal, spawn_session_sweeper,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = WardenSettings::load()?;
    let allowed_origins = settings.allowed_origins()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let user_store = HashMapUserStore::new();
    let session_store = HashMapSessionStore::new(settings.session.policy(), clock.clone());
    let hasher = ConfiguredHasher::from_settings(&settings.hashing)?;

    if settings.seed_demo_accounts {
        seed_accounts(&user_store, &hasher, clock.as_ref(), DEMO_ACCOUNTS).await?;
        tracing::info!("Seeded {} demo accounts", DEMO_ACCOUNTS.len());
    }

    let sweeper = spawn_session_sweeper(session_store.clone(), settings.session.sweep_interval());

    let auth_service = AuthService::new(
        user_store,
        session_store,
        hasher,
        TracingSecurityLog,
        clock,
    );

    let listener = tokio::net::TcpListener::bind(settings.application.address()).await?;
    tracing::info!("Starting warden...");

    AuthServer::new(auth_service)
        .run_standalone(listener, Some(allowed_origins), shutdown_signal())
        .await?;

    sweeper.abort();
    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
