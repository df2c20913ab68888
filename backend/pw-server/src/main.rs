use pw_auth::{
    AccountConfirmation, AuthContext, AuthRateLimiter, JwtAlgorithm, ProviderSettings,
    RestIdentityProvider, SessionCookiePolicy,
};
use pw_config::{AccountConfirmationMode, Config};
use pw_db::UserRepository;
use pw_server::error::{Result as ServerErrorResult, ServerError};
use pw_server::{AppState, build_router, logger};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Failed to read .env: {}", e);
    }

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pw-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = pw_db::connect(&config.database_path()?).await?;
    let users = UserRepository::new(pool);
    info!("Database ready");

    let provider = RestIdentityProvider::new(provider_settings(&config)?)?;
    info!("Identity provider: {} ({})", config.auth.api_url, provider.algorithm());

    let auth = AuthContext::new(Arc::new(provider), Arc::new(users.clone()))
        .with_cookie_policy(SessionCookiePolicy {
            max_age_secs: config.session.max_age_secs,
            secure: config.session_secure(),
        })
        .with_account_confirmation(match config.auth.account_confirmation {
            AccountConfirmationMode::TokenOnly => AccountConfirmation::TokenOnly,
            AccountConfirmationMode::Upstream => AccountConfirmation::Upstream,
        })
        .with_call_timeout(config.auth_timeout());

    if !config.session_secure() {
        warn!("Session cookies are not marked Secure (development mode)");
    }

    let rate_limiter = AuthRateLimiter::new(pw_auth::RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window_secs: config.rate_limit.window_secs,
    });

    let state = AppState::new(auth, users, rate_limiter);
    spawn_rate_limit_cleanup(state.rate_limiter.clone());

    let app = build_router(state, &config.server.cors_origins);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

fn provider_settings(config: &Config) -> ServerErrorResult<ProviderSettings> {
    let algorithm = match config.auth.jwt_secret {
        Some(ref secret) => JwtAlgorithm::HS256 {
            secret: secret.as_bytes().to_vec(),
        },
        None => {
            let config_dir = Config::config_dir()?;
            let public_key_pem = config.auth.read_public_key(&config_dir)?.ok_or_else(|| {
                ServerError::Config(pw_config::ConfigError::auth(
                    "no token verification key configured",
                ))
            })?;
            JwtAlgorithm::RS256 { public_key_pem }
        }
    };

    let mut settings = ProviderSettings::new(&config.auth.project_id, algorithm)
        .with_api_url(&config.auth.api_url)
        .with_api_key(config.auth.api_key.clone())
        .with_request_timeout(config.auth_timeout());

    if let Some(ref issuer) = config.auth.token_issuer {
        settings.token_issuer = issuer.clone();
    }
    if let Some(ref issuer) = config.auth.session_issuer {
        settings.session_issuer = issuer.clone();
    }

    Ok(settings)
}

/// Periodically forget clients whose attempt budget has fully refilled
fn spawn_rate_limit_cleanup(limiter: Arc<AuthRateLimiter>) {
    let every = Duration::from_secs(limiter.config().window_secs.max(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            limiter.retain_recent();
            debug!("Rate limiter tracking {} client keys", limiter.tracked());
        }
    });
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await
        }
    }
}
