use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use rsvp_sync::modules::rsvps::adapters::outbound::google_form::GoogleFormSubmitter;
use rsvp_sync::modules::rsvps::adapters::outbound::google_sheet::GoogleSheetSource;
use rsvp_sync::modules::rsvps::adapters::outbound::in_memory_form::InMemoryFormSubmitter;
use rsvp_sync::modules::rsvps::adapters::outbound::in_memory_sheet::InMemoryGuestSheet;
use rsvp_sync::shared::infrastructure::local_store::file::FileLocalStore;
use rsvp_sync::shared::infrastructure::notifier::RsvpNotifier;
use rsvp_sync::shell::config::Config;
use rsvp_sync::shell::http::router;
use rsvp_sync::shell::state::{Adapters, AppState};
use rsvp_sync::shell::workers::spawn_guest_list_refresher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;
    let store = Arc::new(FileLocalStore::new(config.storage_path.clone()));

    let adapters = match (&config.form_url, &config.sheet_url) {
        (Some(form_url), Some(sheet_url)) => {
            let client = reqwest::Client::builder()
                .timeout(config.http_timeout)
                .user_agent(concat!("rsvp_sync/", env!("CARGO_PKG_VERSION")))
                .build()
                .context("failed to build http client")?;
            Adapters {
                form: Arc::new(GoogleFormSubmitter::new(client.clone(), form_url)),
                sheet: Arc::new(GoogleSheetSource::new(client, sheet_url)),
                store,
            }
        }
        _ => {
            warn!("RSVP_FORM_URL or RSVP_SHEET_URL missing, running offline");
            let sheet = Arc::new(InMemoryGuestSheet::new());
            Adapters {
                form: Arc::new(InMemoryFormSubmitter::forwarding_to(sheet.clone())),
                sheet,
                store,
            }
        }
    };

    let notifier = RsvpNotifier::default();
    let state = AppState::compose(
        adapters,
        notifier.clone(),
        config.sync_settings(),
        config.max_guests,
    );
    let refresher = spawn_guest_list_refresher(state.guest_list.clone(), &notifier);
    let guest_list = state.guest_list.clone();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(storage = %config.storage_path.display(), "RSVP endpoints: http://{addr}");
    info!("GraphQL endpoint: http://{addr}/gql");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    guest_list.shutdown().await;
    refresher.abort();
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
