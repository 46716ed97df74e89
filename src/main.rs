use actix_web::{App, HttpServer};
use anyhow::Context;
use eduportal::config::{AppConfig, Config, LogFormat};
use eduportal::middleware::{cors, ErrorHandler, RateLimiter, RequestId};
use eduportal::AppServices;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Starting EduPortal Learning Management API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let store = config
        .database
        .connect()
        .await
        .context("Failed to open document store")?;

    let services = AppServices::new(store);
    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute);
    let cors_origin = config.security.cors_allowed_origin.clone();

    if cors_origin.is_none() && config.is_production() {
        tracing::warn!("CORS_ALLOWED_ORIGIN not set; accepting requests from any origin");
    }

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let services = services.clone();
        App::new()
            .wrap(ErrorHandler)
            .wrap(rate_limiter.clone())
            .wrap(cors(cors_origin.as_deref()))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| services.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

/// Install the global tracing subscriber
fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("eduportal={},actix_web=info", app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
