//! Core library for the `skycast` dashboard.
//!
//! This crate defines:
//! - The synthetic weather generator (the stand-in for a weather API)
//! - Shared domain models (requests, datasets, conditions)
//! - The provider seam, session cache and on-disk settings
//!
//! It is used by `skycast-cli`, but can also back any other frontend that
//! wants mocked, internally consistent weather data.

pub mod cache;
pub mod condition;
pub mod config;
pub mod generator;
pub mod model;
pub mod provider;
pub mod rng;

pub use cache::CachedProvider;
pub use condition::{Condition, DailyProfile};
pub use config::Config;
pub use generator::SyntheticGenerator;
pub use model::{CityWeatherData, DailyEntry, HourlyEntry, SERIES_HOURS, WeatherRequest};
pub use provider::{SyntheticProvider, WeatherProvider};
pub use rng::{Jitter, Lcg, SeedStream, ThreadJitter, derive_seed};
