use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinatesError {
    #[error("error parsing coordinates: expected \"lat,lon\", got '{0}'")]
    MissingSeparator(String),

    #[error("error parsing coordinates: invalid {which} '{value}'")]
    InvalidComponent { which: &'static str, value: String },
}

/// A geographic position in decimal degrees.
///
/// `(0, 0)` doubles as the "not provided" value, see [`Coordinates::is_unset`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True when both components are exactly zero.
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

impl FromStr for Coordinates {
    type Err = CoordinatesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = value
            .split_once(',')
            .ok_or_else(|| CoordinatesError::MissingSeparator(value.to_string()))?;

        Ok(Self {
            latitude: parse_component("latitude", lat)?,
            longitude: parse_component("longitude", lon)?,
        })
    }
}

fn parse_component(which: &'static str, raw: &str) -> Result<f64, CoordinatesError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoordinatesError::InvalidComponent { which, value: trimmed.to_string() })
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Latitude: {:.6}, Longitude: {:.6}", self.latitude, self.longitude)
    }
}

impl TryFrom<String> for Coordinates {
    type Error = CoordinatesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinates> for String {
    fn from(coords: Coordinates) -> Self {
        format!("{},{}", coords.latitude, coords.longitude)
    }
}
