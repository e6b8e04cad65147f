use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Fixed sample times shared by all four day series.
pub const SERIES_HOURS: [&str; 6] = ["6AM", "9AM", "12PM", "3PM", "6PM", "9PM"];

/// A request for one city's weather.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
    /// Reference instant; `None` means "now". Tests inject a fixed value.
    pub at: Option<NaiveDateTime>,
}

impl WeatherRequest {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into(), at: None }
    }

    pub fn at(city: impl Into<String>, at: NaiveDateTime) -> Self {
        Self { city: city.into(), at: Some(at) }
    }
}

/// One hour of the 12-entry hourly strip. The first entry's label is
/// always `"Now"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: String,
    pub temperature: i32,
    pub condition: Condition,
}

/// One day of the 7-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub day: String,
    pub date: String,
    pub min_temp: i32,
    pub max_temp: i32,
    pub condition: Condition,
    pub humidity: u8,
    pub precipitation: u8,
    pub wind: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperaturePoint {
    pub time: String,
    pub temp: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindPoint {
    pub time: String,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumidityPoint {
    pub time: String,
    pub humidity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UvPoint {
    pub time: String,
    pub index: u8,
}

/// The complete dataset for one city: current conditions plus hourly,
/// weekly and chart series. Produced once per city per session and never
/// mutated; the dashboard treats it as an opaque value.
///
/// Serializes with the camelCase keys the web dashboard consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityWeatherData {
    pub city: String,
    /// Current temperature, °C.
    pub temperature: i32,
    pub condition: Condition,
    pub feels_like: i32,
    /// Wind speed, km/h.
    pub wind: u32,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// UV index, 0–10.
    pub uv_index: u8,
    /// Barometric pressure, hPa.
    pub pressure: u32,
    pub hourly_forecast: Vec<HourlyEntry>,
    pub weekly_forecast: Vec<DailyEntry>,
    #[serde(rename = "temperatureData")]
    pub temperature_series: Vec<TemperaturePoint>,
    #[serde(rename = "windData")]
    pub wind_series: Vec<WindPoint>,
    #[serde(rename = "humidityData")]
    pub humidity_series: Vec<HumidityPoint>,
    #[serde(rename = "uvIndexData")]
    pub uv_series: Vec<UvPoint>,
}
