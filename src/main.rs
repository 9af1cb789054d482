use std::sync::Arc;

use intake_portal::config::PortalConfig;
use intake_portal::error::Result;
use intake_portal::submit::{SubmissionGateway, WebhookGateway};
use intake_portal::summary::{GeminiGenerator, SummaryGenerator};
use intake_portal::wizard::{WizardSession, portal_routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let port = config.port;

    eprintln!("📋 Intake Portal v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Webhook: {}", config.webhook_url);
    eprintln!("   Session API: http://0.0.0.0:{}/api/session", port);
    eprintln!("   Source tag: {}\n", config.source_tag);

    let generator: Arc<dyn SummaryGenerator> =
        Arc::new(GeminiGenerator::new(config.gemini_api_key, config.model));
    let gateway: Arc<dyn SubmissionGateway> = Arc::new(WebhookGateway::new(config.webhook_url));
    let session = WizardSession::new(generator, gateway, config.source_tag);

    let app = portal_routes(session);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!(port, "Intake portal started");
    axum::serve(listener, app).await?;

    Ok(())
}
