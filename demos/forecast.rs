//! Run one fetch cycle against a local forecast service and print the page.
//!
//! ```bash
//! FORECAST_API_URL=http://localhost:8000 cargo run --example forecast --features native -- 6920.T
//! ```

use forecast_view::prelude::*;
use tracing::Level;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), ForecastError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let ticker = std::env::args()
        .nth(1)
        .map(Ticker::from)
        .unwrap_or_default();

    let client = ForecastClientBuilder::from_env().build()?;
    tracing::info!(base_url = client.base_url(), %ticker, "Using forecast service");

    let session = ForecastSession::new(client);
    println!("{}", render_page(&session.state().await)?);

    session
        .trigger_fetch(&ticker, &DateRange::default(), &SimulationConfig::default())
        .await;

    println!("{}", render_page(&session.state().await)?);
    Ok(())
}
