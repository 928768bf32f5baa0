//! BrainTrader - a mindful trading journal, headless.
//!
//! Runs the journal session without a UI; every published view is rendered
//! as structured log lines to stdout.
//!
//! # Environment Variables
//! - `MODE` - backend: 'memory' or 'sqlite' (default: memory)
//! - `DATABASE_URL` - SQLite location for sqlite mode
//! - `BACKEND_API_KEY` - signing secret for credential digests
//! - `DEMO_SEED` - seed the memory backend with a sample journal (default: true)

use anyhow::Result;
use braintrader::application::client::SessionClient;
use braintrader::application::session::SessionView;
use braintrader::application::system::Application;
use braintrader::config::{Config, Mode};
use braintrader::infrastructure::memory::{DEMO_EMAIL, DEMO_PASSWORD};
use braintrader::interfaces::coaching::{DAILY_MANTRA, MindsetCoach};
use braintrader::interfaces::view_models::dashboard_view_model::DashboardViewModel;
use braintrader::interfaces::view_models::report_view_model::ReportViewModel;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

fn render(view: &SessionView, coach: &mut MindsetCoach) {
    if let Some(banner) = &view.banner {
        warn!("Banner: {}", banner);
    }

    let Some(identity) = &view.identity else {
        info!("Signed out.");
        return;
    };

    info!("Hi, {}", identity.greeting_name());
    for card in DashboardViewModel::stat_cards(&view.headline) {
        info!("{}: {}", card.label, card.value);
    }

    info!(
        "Journal ({} filter): {} of {} trades",
        view.list_filter,
        view.visible.len(),
        view.records.len()
    );
    if let Some(notice) = DashboardViewModel::journal_notice(&view.visible) {
        info!("  {}", notice);
    }
    for row in DashboardViewModel::journal_rows(&view.visible).iter().take(5) {
        info!(
            "  {} {} {} lot {} {} {}",
            row.date, row.instrument, row.action, row.lot, row.levels, row.net_pl
        );
    }

    let report = ReportViewModel::build(Some(identity), &view.report);
    info!("{} ({}) for {}", report.title, report.selected, report.owner);
    match &report.stats {
        Some(stats) => {
            for stat in stats {
                info!("  {}: {}", stat.label, stat.value);
            }
        }
        None => info!("  {}: {}", report.empty_title, report.empty_hint),
    }

    // One card of the tip deck per refresh
    let tip = coach.current();
    info!("Mindset tip: {} - {}", tip.title, tip.body);
    coach.advance();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("BrainTrader {} starting...", env!("CARGO_PKG_VERSION"));
    info!("Daily Mantra: {}", DAILY_MANTRA);

    let config = Config::from_env()?;
    info!("Configuration loaded: Mode={:?}", config.mode);

    let app = Application::build(config.clone()).await?;
    let handle = app.start().await?;
    let client = SessionClient::new(handle);

    let mut view_rx = client.watch_view();
    tokio::spawn(async move {
        let mut coach = MindsetCoach::new();
        while view_rx.changed().await.is_ok() {
            let view = view_rx.borrow_and_update().clone();
            render(&view, &mut coach);
        }
    });

    if matches!(config.mode, Mode::Memory) && config.demo_seed {
        info!("Signing in with the demo account ({})", DEMO_EMAIL);
        client.sign_in(DEMO_EMAIL, DEMO_PASSWORD)?;
    }

    info!("Session running. Press Ctrl+C to shutdown.");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting...");

    Ok(())
}
