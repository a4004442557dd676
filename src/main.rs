use anyhow::Result;
use slugline::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use slugline::config::{AppConfig, StoreBackend};
use slugline::domain::translation::{SluggableRecordWriteStore, TranslatableSlugStore};
use slugline::infrastructure::{
    database,
    repositories::{InMemoryTranslationStore, PostgresTranslationStore, SqliteTranslationStore},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use slugline::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Stores = (Arc<dyn TranslatableSlugStore>, Arc<dyn SluggableRecordWriteStore>);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let (read_store, write_store) = init_stores(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        read_store,
        write_store,
        clock,
        slugger,
        config.slug_settings(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        default_locale = %config.default_locale(),
        separator = %config.slug_separator(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn init_stores(config: &AppConfig) -> Result<Stores> {
    let stores: Stores = match config.backend()? {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory translation store; data is lost on exit");
            let store = Arc::new(InMemoryTranslationStore::new());
            split_store(store)
        }
        StoreBackend::Sqlite => {
            let pool = database::init_sqlite_pool(config.database_url()).await?;
            database::run_sqlite_migrations(&pool).await?;
            let store = Arc::new(SqliteTranslationStore::new(Arc::new(pool)));
            split_store(store)
        }
        StoreBackend::Postgres => {
            let pool = database::init_postgres_pool(config.database_url()).await?;
            database::run_postgres_migrations(&pool).await?;
            let store = Arc::new(PostgresTranslationStore::new(pool));
            split_store(store)
        }
    };
    Ok(stores)
}

fn split_store<S>(store: Arc<S>) -> Stores
where
    S: TranslatableSlugStore + SluggableRecordWriteStore + 'static,
{
    let read_store: Arc<dyn TranslatableSlugStore> = store.clone();
    let write_store: Arc<dyn SluggableRecordWriteStore> = store;
    (read_store, write_store)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
