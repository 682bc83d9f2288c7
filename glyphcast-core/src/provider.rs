use crate::{Coordinates, CurrentConditions};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_by_coordinates(
        &self,
        coords: Coordinates,
    ) -> anyhow::Result<CurrentConditions>;
}
