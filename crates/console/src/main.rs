//! `rideops-console` -- prints the admin dashboard overview.
//!
//! Restores the persisted session, loads the review summaries for admins,
//! drivers, merchants, and wallet top-ups, and logs them.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description                         |
//! |------------------------|----------|-------------------------|-------------------------------------|
//! | `PUBLIC_API_URL`       | no       | `http://127.0.0.1:8000` | Backend base URL                    |
//! | `REQUEST_TIMEOUT_SECS` | no       | `30`                    | Per-request timeout                 |
//! | `SESSION_STATE_PATH`   | no       | in-memory               | JSON file holding token and language |
//! | `DEFAULT_LANGUAGE`     | no       | `en`                    | `en` or `id`                        |
//! | `LOG_FORMAT`           | no       | `text`                  | `json` for structured log lines     |

use rideops_client::events::next_event;
use rideops_client::{AppEvent, ClientConfig};
use rideops_core::envelope::StatusSummary;
use rideops_stores::AppContext;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "rideops_console=info,rideops_client=info,rideops_stores=info".into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn log_summary(resource: &str, summary: Option<StatusSummary>) {
    match summary {
        Some(s) => tracing::info!(
            resource,
            pending = s.pending,
            submitted = s.submitted,
            approved = s.approve,
            rejected = s.rejected,
            total = s.total,
            "Review summary",
        ),
        None => tracing::warn!(resource, "Summary unavailable"),
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting rideops-console");

    let mut ctx = AppContext::new(config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to initialise application context");
        std::process::exit(1);
    });

    if ctx.session.bearer_token().is_none() {
        tracing::warn!("No stored session; admin endpoints will answer 401");
    }

    let mut events = ctx.events.subscribe();
    tokio::spawn(async move {
        while let Some(event) = next_event(&mut events).await {
            match event {
                AppEvent::SessionExpired => tracing::warn!("Session expired; sign in again"),
                AppEvent::AccessDenied { message } => {
                    tracing::warn!(message = message.as_deref().unwrap_or(""), "Access denied")
                }
                AppEvent::StoreChanged { store } => tracing::debug!(store, "Store updated"),
                AppEvent::LanguageChanged { language } => {
                    tracing::debug!(language = language.as_str(), "Language changed")
                }
            }
        }
    });

    let overview = ctx.dashboard_overview().await;
    log_summary(&ctx.ui.t("sidebar.admins"), overview.admins);
    log_summary(&ctx.ui.t("sidebar.drivers"), overview.drivers);
    log_summary(&ctx.ui.t("sidebar.merchants"), overview.merchants);
    log_summary(&ctx.ui.t("sidebar.wallet"), overview.topups);
}
