//! Smart Corner briefing server.
//!
//! Usage:
//!     SMART_CORNER__SERVER__PORT=8080 SMTP_PASS=... API_KEY=... smart-corner

use std::sync::Arc;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smart_corner::adapters::ai::provider_from_config;
use smart_corner::adapters::http::{briefing_router, BriefingAppState};
use smart_corner::adapters::mail::{MailSettings, SmtpMailTransport};
use smart_corner::application::{
    DispatchSettings, NotificationDispatcher, SubmitBriefingHandler, SummaryGenerator,
};
use smart_corner::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let provider = provider_from_config(&config.ai)?;
    match &provider {
        Some(p) => tracing::info!(
            provider = %p.provider_info().name,
            model = %p.provider_info().model,
            "AI summaries enabled"
        ),
        None => tracing::warn!("No AI credential configured, summaries will be placeholders"),
    }

    let transport = SmtpMailTransport::new(&MailSettings::resolve(&config.email))?;
    let dispatcher = NotificationDispatcher::new(
        Arc::new(transport),
        DispatchSettings {
            from_header: config.email.from_header(),
            operator_email: config.email.operator_email.clone(),
        },
    );
    let summaries = SummaryGenerator::new(provider).with_timeout(config.ai.timeout());
    let handler = SubmitBriefingHandler::new(summaries, dispatcher);

    let app = build_app(&config.server, BriefingAppState::new(handler));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_app(server: &ServerConfig, state: BriefingAppState) -> Router {
    briefing_router()
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
