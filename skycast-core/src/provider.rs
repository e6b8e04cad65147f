use std::fmt::Debug;

use chrono::Local;

use crate::generator::SyntheticGenerator;
use crate::model::{CityWeatherData, WeatherRequest};

/// Source of per-city weather datasets.
///
/// The dashboard only ever talks to this trait; the synthetic generator
/// sits behind it where a real API client otherwise would.
pub trait WeatherProvider: Send + Debug {
    fn fetch(&mut self, request: &WeatherRequest) -> anyhow::Result<CityWeatherData>;
}

/// Provider that fabricates weather locally instead of calling anything.
#[derive(Debug, Default)]
pub struct SyntheticProvider {
    generator: SyntheticGenerator,
}

impl SyntheticProvider {
    pub fn new() -> Self {
        Self { generator: SyntheticGenerator::new() }
    }
}

impl WeatherProvider for SyntheticProvider {
    fn fetch(&mut self, request: &WeatherRequest) -> anyhow::Result<CityWeatherData> {
        let at = request.at.unwrap_or_else(|| Local::now().naive_local());
        tracing::debug!(city = %request.city, %at, "generating synthetic weather");
        Ok(self.generator.generate_at(&request.city, at))
    }
}
