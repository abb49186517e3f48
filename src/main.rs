use anyhow::Result;
use taskboard::{config::Config, logging, tui};

fn main() -> Result<()> {
    // A broken config file never prevents the board from starting
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    // Logging falls back rather than failing; report why once it is up
    let log = logging::init(&config.log);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "using default configuration");
    }
    for warning in &log.warnings {
        tracing::warn!(%warning, "log configuration ignored");
    }
    tracing::info!("starting taskboard");

    // Initialize and run the app
    let mut app = tui::App::new(&config)?;
    app.run()?;

    Ok(())
}
