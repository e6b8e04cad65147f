use chrono::{Datelike, NaiveDate};
use rand::Rng as _;

/// Derive the generation seed for a city on a given calendar day.
///
/// The seed is the sum of the city name's UTF-16 code units plus a coarse
/// day-of-year proxy (`day + month * 30`), so the same city gets the same
/// seed all day and a slightly different one tomorrow. An empty city name
/// degrades to the date component alone.
pub fn derive_seed(city: &str, date: NaiveDate) -> u64 {
    let name_sum: u64 = city.encode_utf16().map(u64::from).sum();
    name_sum + u64::from(date.day()) + u64::from(date.month0()) * 30
}

/// A reproducible stream of floats in `[0, 1)`.
///
/// The generator consumes this stream in a fixed order for the base
/// quantities, so any implementation substituted in tests must be prepared
/// to answer the same number of draws.
pub trait SeedStream {
    fn next_unit(&mut self) -> f64;
}

/// Linear-congruential stream: `state = (state * 9301 + 49297) mod 233280`.
///
/// Deliberately tiny; it only has to make city weather look varied, not
/// survive statistical scrutiny.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Stream seeded from a city name and calendar day via [`derive_seed`].
    pub fn for_city(city: &str, date: NaiveDate) -> Self {
        Self::new(derive_seed(city, date))
    }
}

impl SeedStream for Lcg {
    fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(9301).wrapping_add(49297) % 233_280;
        self.state as f64 / 233_280.0
    }
}

/// The unseeded random source behind condition draws and all forecast and
/// series jitter. Kept separate from [`SeedStream`] so tests can pin either
/// side down independently.
pub trait Jitter {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in `min..=max`.
    fn between(&mut self, min: i64, max: i64) -> i64;
}

/// Production [`Jitter`] backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadJitter;

impl Jitter for ThreadJitter {
    fn unit(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }

    fn between(&mut self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}
