use serde::{Deserialize, Serialize};

use crate::rng::Jitter;

/// Weather condition labels shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Sunny,
    Clear,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
    Thunderstorm,
    Snowy,
    Windy,
    Foggy,
}

/// Draw weights, walked in declared order. They sum to 1.00.
const WEIGHTED: [(Condition, f64); 9] = [
    (Condition::Sunny, 0.20),
    (Condition::Clear, 0.15),
    (Condition::PartlyCloudy, 0.25),
    (Condition::Cloudy, 0.15),
    (Condition::Rainy, 0.10),
    (Condition::Thunderstorm, 0.05),
    (Condition::Snowy, 0.05),
    (Condition::Windy, 0.03),
    (Condition::Foggy, 0.02),
];

/// Inclusive `[min, max]` ranges for the daily stats correlated with a
/// condition: humid when it storms, calm when it is clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyProfile {
    pub humidity: (i64, i64),
    pub precipitation: (i64, i64),
    pub wind: (i64, i64),
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Clear => "Clear",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snowy => "Snowy",
            Condition::Windy => "Windy",
            Condition::Foggy => "Foggy",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Sunny,
            Condition::Clear,
            Condition::PartlyCloudy,
            Condition::Cloudy,
            Condition::Rainy,
            Condition::Thunderstorm,
            Condition::Snowy,
            Condition::Windy,
            Condition::Foggy,
        ]
    }

    /// Declared draw weight of this condition.
    pub fn weight(&self) -> f64 {
        WEIGHTED
            .iter()
            .find(|(c, _)| c == self)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    /// Weighted draw from the unseeded source.
    ///
    /// Walks the catalogue accumulating weight until the draw is covered.
    /// The fallback is unreachable while the weights sum to 1, but guards
    /// against floating-point drift in the accumulation.
    pub fn sample<J: Jitter + ?Sized>(jitter: &mut J) -> Condition {
        let r = jitter.unit();
        let mut acc = 0.0;

        for (condition, weight) in WEIGHTED {
            acc += weight;
            if r < acc {
                return condition;
            }
        }

        Condition::PartlyCloudy
    }

    /// Stat ranges for a forecast day under this condition.
    pub fn daily_profile(&self) -> DailyProfile {
        match self {
            Condition::Rainy => DailyProfile {
                humidity: (70, 90),
                precipitation: (40, 80),
                wind: (10, 25),
            },
            Condition::Thunderstorm => DailyProfile {
                humidity: (75, 95),
                precipitation: (60, 90),
                wind: (20, 35),
            },
            Condition::Snowy => DailyProfile {
                humidity: (65, 85),
                precipitation: (50, 70),
                wind: (15, 30),
            },
            Condition::Cloudy => DailyProfile {
                humidity: (60, 80),
                precipitation: (20, 40),
                wind: (8, 20),
            },
            Condition::PartlyCloudy => DailyProfile {
                humidity: (50, 70),
                precipitation: (5, 25),
                wind: (5, 15),
            },
            Condition::Sunny | Condition::Clear => DailyProfile {
                humidity: (30, 60),
                precipitation: (0, 10),
                wind: (3, 12),
            },
            Condition::Windy => DailyProfile {
                humidity: (40, 70),
                precipitation: (0, 30),
                wind: (25, 45),
            },
            Condition::Foggy => DailyProfile {
                humidity: (75, 95),
                precipitation: (0, 20),
                wind: (0, 10),
            },
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Condition {
    type Error = UnknownCondition;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Condition::all()
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| UnknownCondition(value.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown weather condition '{0}'")]
pub struct UnknownCondition(String);
