//! Core library for the `glyphcast` CLI.
//!
//! This crate defines:
//! - Coordinate parsing and run configuration (flags, config file)
//! - The condition-code to Nerd Font glyph mapping
//! - Abstraction over the weather service, with an OpenWeather client
//! - Rendering of the one-line report

pub mod config;
pub mod coords;
pub mod glyph;
pub mod model;
pub mod provider;
pub mod report;

pub use config::{Config, ConfigArgs, ConfigError, FileConfig};
pub use coords::{Coordinates, CoordinatesError};
pub use glyph::{UNKNOWN_GLYPH, glyph_for, is_daytime};
pub use model::CurrentConditions;
pub use provider::{OpenWeatherProvider, WeatherProvider};
