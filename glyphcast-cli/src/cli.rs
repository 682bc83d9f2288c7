use std::{io::Write, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use glyphcast_core::{
    Config, ConfigArgs, Coordinates, FileConfig, OpenWeatherProvider, WeatherProvider, report,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "glyphcast",
    version,
    about = "Print current weather as a single line, optionally with a Nerd Font icon"
)]
pub struct Cli {
    /// OpenWeather API key.
    #[arg(long, env = "OWM_API_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Coordinates to query (example: 51,0).
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    pub coords: Option<Coordinates>,

    /// Temperature units: K, C or F [default: C].
    #[arg(long)]
    pub units: Option<String>,

    /// Language as an ISO 639-1 code (examples: en, la, fr) [default: en].
    #[arg(long)]
    pub lang: Option<String>,

    /// Print the complete response returned by the server.
    #[arg(long)]
    pub debug: bool,

    /// Prefix the temperature with a Nerd Font weather icon.
    #[arg(long)]
    pub icon: bool,

    /// Read defaults from this file instead of the platform config dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Weather service endpoint.
    #[arg(long, env = "GLYPHCAST_BASE_URL", hide = true)]
    pub base_url: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { key, coords, units, lang, debug, icon, config, base_url } = self;

        let file = match config {
            Some(path) => FileConfig::load_from(&path)?,
            None => FileConfig::load()?,
        };

        let args = ConfigArgs { api_key: key, coordinates: coords, units, lang, debug, icon };
        let config = match Config::resolve(args, &file) {
            Ok(config) => config,
            Err(guidance) => {
                tracing::debug!(%guidance, "configuration incomplete");
                println!("{guidance}");
                return Ok(());
            }
        };

        let mut provider =
            OpenWeatherProvider::new(config.api_key.clone(), &config.units, config.lang.clone())?;
        if let Some(url) = base_url {
            provider = provider.with_base_url(url);
        }

        let now = chrono::Utc::now().timestamp();
        print_report(&provider, &config, now, &mut std::io::stdout()).await
    }
}

/// Fetch current conditions and write the report (and the complete server response in debug
/// mode) to `out`. `out` is only touched once the fetch has finished.
pub async fn print_report(
    provider: &dyn WeatherProvider,
    config: &Config,
    now: i64,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::info!(coords = %config.coordinates, "fetching current conditions");
    let conditions = provider.current_by_coordinates(config.coordinates).await?;

    let line = report::summarize(&conditions, config, now);
    if config.debug {
        let dump = conditions.debug_dump().context("Failed to encode debug output")?;
        writeln!(out, "{dump}").context("Failed to write debug output")?;
    }
    writeln!(out, "{line}").context("Failed to write report")?;

    Ok(())
}
