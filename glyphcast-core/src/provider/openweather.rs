use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;

use crate::{Coordinates, CurrentConditions};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Language codes the service translates descriptions into.
pub const LANGUAGES: &[&str] = &[
    "af", "al", "ar", "az", "bg", "ca", "cz", "da", "de", "el", "en", "es", "eu", "fa", "fi",
    "fr", "gl", "he", "hi", "hr", "hu", "id", "it", "ja", "kr", "la", "lt", "mk", "nl", "no",
    "pl", "pt", "pt_br", "ro", "ru", "se", "sk", "sl", "sp", "sr", "sv", "th", "tr", "ua", "uk",
    "vi", "zh_cn", "zh_tw", "zu",
];

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    units: &'static str,
    lang: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Fails when `units` is not one of `C`, `F` or `K`, or `lang` is not in [`LANGUAGES`].
    pub fn new(api_key: String, units: &str, lang: String) -> Result<Self> {
        let units = units_param(units)?;
        let lang = lang_param(&lang)?;

        Ok(Self {
            api_key,
            units,
            lang,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn fetch_current(&self, coords: Coordinates) -> Result<CurrentConditions> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();

        tracing::debug!(%url, %lat, %lon, units = self.units, lang = %self.lang, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("units", self.units),
                ("lang", self.lang.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed = CurrentConditions::from_json(&body)
            .context("Failed to parse OpenWeather current JSON")?;

        tracing::debug!(
            location = %parsed.name,
            observed_at = ?parsed.observed_at(),
            description = %parsed.description(),
            "received current weather"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_coordinates(&self, coords: Coordinates) -> Result<CurrentConditions> {
        self.fetch_current(coords).await
    }
}

/// Translate a temperature unit letter into the API's `units` parameter.
fn units_param(units: &str) -> Result<&'static str> {
    match units.to_ascii_uppercase().as_str() {
        "C" => Ok("metric"),
        "F" => Ok("imperial"),
        "K" => Ok("standard"),
        _ => Err(anyhow!("unit of measure not available: '{units}' (expected K, C or F)")),
    }
}

fn lang_param(lang: &str) -> Result<String> {
    let lower = lang.to_ascii_lowercase();
    if LANGUAGES.contains(&lower.as_str()) {
        Ok(lower)
    } else {
        Err(anyhow!("language not available: '{lang}'"))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
