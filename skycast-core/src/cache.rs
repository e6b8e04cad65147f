use std::collections::HashMap;

use crate::model::{CityWeatherData, WeatherRequest};
use crate::provider::WeatherProvider;

/// Session cache over any [`WeatherProvider`].
///
/// The first visit to a city generates its dataset; revisits return the
/// cached value unchanged, so the dashboard shows the same numbers for as
/// long as the session lives. Keyed by the city name exactly as requested.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    cache: HashMap<String, CityWeatherData>,
}

impl<P: WeatherProvider> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, cache: HashMap::new() }
    }

    /// Number of cities cached so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop all cached datasets, forcing regeneration on next fetch.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<P: WeatherProvider> WeatherProvider for CachedProvider<P> {
    fn fetch(&mut self, request: &WeatherRequest) -> anyhow::Result<CityWeatherData> {
        if let Some(hit) = self.cache.get(&request.city) {
            tracing::debug!(city = %request.city, "weather cache hit");
            return Ok(hit.clone());
        }

        let data = self.inner.fetch(request)?;
        self.cache.insert(request.city.clone(), data.clone());
        Ok(data)
    }
}
