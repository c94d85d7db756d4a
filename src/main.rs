//! IncubatorHub
//!
//! Command line entry point: resolves a page path for a guest visitor and
//! prints what that page would show.

use anyhow::Context;
use tracing::{info, warn};

use IncubatorHub::{
    config::Settings,
    router::{Navigation, Route},
    services::ServiceFactory,
    utils::{helpers::truncate_text, logging},
    views::EventsPage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", IncubatorHub::info());

    let services = ServiceFactory::new(settings)?;
    let router = services.router();

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let navigation = router.resolve(&path, &services.auth);

    if let Navigation::Redirect { from, to } = navigation {
        println!("{} requires login, redirected to {}", from.title(), to.path());
    }

    match navigation.page() {
        Route::Events => {
            let mut page = EventsPage::new();
            if let Err(e) = page.load(&services.api).await {
                warn!(
                    base_url = services.api.base_url(),
                    severity = %e.severity(),
                    recoverable = e.is_recoverable(),
                    error = %e,
                    "Events could not be loaded"
                );
            }

            if let Some(error) = page.error() {
                println!("{}", error);
            }
            for event in page.visible() {
                println!(
                    "{}  {}  {}",
                    event.display_date(),
                    event.name,
                    truncate_text(&event.description, 60)
                );
            }
        }
        route => println!("{} ({})", route.title(), route.path()),
    }

    Ok(())
}
