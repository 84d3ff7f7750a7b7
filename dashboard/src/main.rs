//! Inventory management dashboard entry point
//!
//! Boots configuration, the backend client and the session provider, then
//! parks until shutdown. The UI layer drives the `App` shell from there.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_dashboard::app::{ActiveView, App, View};
use inventory_dashboard::client::BackendClient;
use inventory_dashboard::config::Config;
use inventory_dashboard::notify::TracingNotifier;
use inventory_dashboard::session::SessionProvider;
use inventory_dashboard::store::{AuthBackend, InventoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invdash=debug,inventory_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing backend connection parameters are fatal
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting inventory dashboard");
    tracing::info!("Environment: {}", config.environment);

    let client = Arc::new(BackendClient::new(&config.backend));
    let notifier = Arc::new(TracingNotifier::new());

    let auth: Arc<dyn AuthBackend> = client.clone();
    let session = Arc::new(SessionProvider::new(auth, notifier.clone()));
    session.start().await;

    match session.current_user().await {
        Some(user) => tracing::info!(
            "Restored session for {}",
            user.email.as_deref().unwrap_or("unknown user")
        ),
        None => tracing::info!("No existing session; sign-in required"),
    }

    let store: Arc<dyn InventoryStore> = client.clone();
    let app = App::new(store, notifier, session.clone());
    if let ActiveView::Dashboard(dashboard) = app.open(View::Dashboard).await {
        tracing::info!(
            "{} products, {} pending alerts",
            dashboard.stats.total_products,
            dashboard.stats.low_stock_alerts
        );
    }

    // Park until shutdown; the UI event loop owns the app from here
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    session.shutdown().await;

    Ok(())
}
