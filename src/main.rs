use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cine_reserve::{catalog, config::Config, console::BookingApp, theater::Theater};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🎬 Starting Cine Reserve");

    let mut theater = Theater::new(
        config.theater.name.as_str(),
        config.theater.rows,
        config.theater.cols,
    );
    catalog::seed_sample_shows(&mut theater);
    info!(
        "Theater '{}' initialized: {}x{} seats, {} shows",
        theater.name(),
        theater.rows(),
        theater.cols(),
        theater.show_count()
    );

    let mut app = BookingApp::new(theater);
    app.run();

    info!("Session finished");
    Ok(())
}
