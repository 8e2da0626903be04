use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hanz_travel::{
    config::{Config, OutputFormat},
    storefront::{checkout, render_storefront},
    AppError, AppResult,
};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hanz_travel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        language = %config.state.language,
        aircraft = %config.state.aircraft_id,
        route = %config.state.route_id,
        "Rendering storefront"
    );

    match config.output {
        OutputFormat::Text => print!("{}", render_storefront(&config.state)?),
        OutputFormat::Json => {
            let summary = checkout(&config.state)?;
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| AppError::Internal(format!("Failed to encode summary: {}", e)))?;
            println!("{}", json);
        }
    }

    Ok(())
}
