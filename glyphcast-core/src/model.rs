use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::glyph;

/// Current conditions as returned by the OpenWeather `data/2.5/weather` endpoint.
///
/// Every field is defaulted, so a sparse response still decodes. When built
/// with [`CurrentConditions::from_json`] the complete payload is kept in `raw`,
/// including the blocks not modelled here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub coord: Coord,
    pub weather: Vec<Condition>,
    pub main: Main,
    pub sys: Sys,
    pub name: String,
    pub dt: i64,
    /// Shift in seconds from UTC.
    pub timezone: i64,
    #[serde(skip)]
    pub raw: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub id: i32,
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Main {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sys {
    pub country: String,
    pub sunrise: i64,
    pub sunset: i64,
}

impl CurrentConditions {
    /// Decode a response body, keeping the full payload for debug output.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(body)?;
        let mut conditions: CurrentConditions = serde_json::from_value(raw.clone())?;
        conditions.raw = Some(raw);
        Ok(conditions)
    }

    /// Pretty JSON of everything the server sent, or of the decoded fields
    /// when no payload was kept.
    pub fn debug_dump(&self) -> serde_json::Result<String> {
        match &self.raw {
            Some(raw) => serde_json::to_string_pretty(raw),
            None => serde_json::to_string_pretty(self),
        }
    }

    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    /// All condition descriptions joined by a space.
    pub fn description(&self) -> String {
        self.weather
            .iter()
            .map(|c| c.description.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }

    pub fn is_daytime_at(&self, now: i64) -> bool {
        glyph::is_daytime(self.sys.sunrise, self.sys.sunset, now)
    }
}
