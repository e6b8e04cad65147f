use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::condition::Condition;
use crate::model::{
    CityWeatherData, DailyEntry, HourlyEntry, HumidityPoint, SERIES_HOURS, TemperaturePoint,
    UvPoint, WindPoint,
};
use crate::rng::{Jitter, Lcg, SeedStream, ThreadJitter};

/// Diurnal temperature offsets, peaking mid-afternoon.
const TEMP_CURVE: [i32; 6] = [-4, -2, 2, 3, 0, -3];

/// Humidity drops through the day and recovers at night.
const HUMIDITY_CURVE: [i32; 6] = [5, 0, -7, -5, 2, 7];

/// UV as a fraction of the day's peak, zero after sunset.
const UV_CURVE: [f64; 6] = [0.1, 0.4, 1.0, 0.7, 0.3, 0.0];

/// Per-hour probability that the hourly forecast switches condition.
const HOURLY_CONDITION_FLIP: f64 = 0.15;

/// Synthetic stand-in for a weather API.
///
/// Base quantities (temperature, humidity, wind, pressure, UV) come from a
/// stream seeded by city name and calendar day, so a city keeps the same
/// headline numbers all day. Everything layered on top — the current
/// condition, hourly walk, weekly spread, chart noise — draws from the
/// unseeded [`Jitter`] source and varies call to call.
#[derive(Debug, Default)]
pub struct SyntheticGenerator<J = ThreadJitter> {
    jitter: J,
}

impl SyntheticGenerator<ThreadJitter> {
    pub fn new() -> Self {
        Self { jitter: ThreadJitter }
    }
}

impl<J: Jitter> SyntheticGenerator<J> {
    pub fn with_jitter(jitter: J) -> Self {
        Self { jitter }
    }

    /// Generate a dataset for `city` as of the system clock.
    pub fn generate(&mut self, city: &str) -> CityWeatherData {
        self.generate_at(city, Local::now().naive_local())
    }

    /// Generate a dataset for `city` as of a caller-supplied instant.
    pub fn generate_at(&mut self, city: &str, now: NaiveDateTime) -> CityWeatherData {
        let mut stream = Lcg::for_city(city, now.date());
        self.generate_with_stream(&mut stream, city, now)
    }

    /// Generate with an explicit seed stream. This is the substitution
    /// point for deterministic base quantities.
    ///
    /// The stream is consumed in a fixed order: base temperature,
    /// humidity, wind, pressure, max UV. Reordering these draws changes
    /// every downstream value.
    pub fn generate_with_stream(
        &mut self,
        stream: &mut dyn SeedStream,
        city: &str,
        now: NaiveDateTime,
    ) -> CityWeatherData {
        let base_temp = (5.0 + stream.next_unit() * 30.0).round() as i32;
        let humidity = (40.0 + stream.next_unit() * 40.0).round() as u8;
        let wind = (5.0 + stream.next_unit() * 25.0).round() as u32;

        // No draw: high humidity reads warmer, strong wind reads colder.
        let feels_like = base_temp + if humidity > 70 { 2 } else { -1 } + if wind > 20 { -2 } else { 0 };

        let pressure = (1000.0 + stream.next_unit() * 30.0).round() as u32;
        let max_uv = (stream.next_unit() * 10.0).round() as u8;

        // The headline condition is re-rolled every generation, unlike the
        // seed-stable numbers above.
        let condition = Condition::sample(&mut self.jitter);

        let hourly_forecast = self.hourly_forecast(now, base_temp, condition);
        let weekly_forecast = self.weekly_forecast(now.date(), base_temp);
        let temperature_series = self.temperature_series(base_temp);
        let wind_series = self.wind_series(wind);
        let humidity_series = self.humidity_series(humidity);
        let uv_series = self.uv_series(max_uv);

        CityWeatherData {
            city: city.to_string(),
            temperature: base_temp,
            condition,
            feels_like,
            wind,
            humidity,
            uv_index: max_uv,
            pressure,
            hourly_forecast,
            weekly_forecast,
            temperature_series,
            wind_series,
            humidity_series,
            uv_series,
        }
    }

    /// 12 entries: "Now" plus the next 11 wall-clock hours.
    ///
    /// Temperature is a random walk (each hour steps from the previous
    /// one, wider steps in daylight) and the condition is sticky with an
    /// occasional re-roll.
    fn hourly_forecast(
        &mut self,
        now: NaiveDateTime,
        base_temp: i32,
        current: Condition,
    ) -> Vec<HourlyEntry> {
        let mut entries = Vec::with_capacity(12);
        entries.push(HourlyEntry {
            time: "Now".to_string(),
            temperature: base_temp,
            condition: current,
        });

        let mut temp = base_temp;
        let mut condition = current;

        for offset in 1..=11 {
            let hour = (now + Duration::hours(offset)).hour();
            let daytime = hour > 6 && hour < 18;
            let step = if daytime {
                self.jitter.between(-2, 2)
            } else {
                self.jitter.between(-1, 1)
            };
            temp += step as i32;

            if self.jitter.unit() < HOURLY_CONDITION_FLIP {
                condition = Condition::sample(&mut self.jitter);
            }

            entries.push(HourlyEntry {
                time: hour_label(hour),
                temperature: temp,
                condition,
            });
        }

        entries
    }

    /// 7 entries starting today. The min/max spread widens with forecast
    /// distance and the base temperature drifts day to day, so a warming
    /// or cooling trend emerges across the week.
    fn weekly_forecast(&mut self, today: NaiveDate, base_temp: i32) -> Vec<DailyEntry> {
        let mut entries = Vec::with_capacity(7);
        let mut running = base_temp;

        for i in 0..7i64 {
            let date = today + Duration::days(i);
            let day = match i {
                0 => "Today".to_string(),
                1 => "Tomorrow".to_string(),
                _ => date.format("%A").to_string(),
            };

            let variance = (i as f64 * 1.5).min(10.0);
            let min_temp = (f64::from(running)
                - self.jitter.between(2, 4 + i) as f64
                - variance / 2.0)
                .round() as i32;
            let max_temp = (f64::from(running)
                + self.jitter.between(1, 3 + i) as f64
                + variance / 2.0)
                .round() as i32;

            let condition = Condition::sample(&mut self.jitter);
            let profile = condition.daily_profile();
            let humidity = self.jitter.between(profile.humidity.0, profile.humidity.1) as u8;
            let precipitation =
                self.jitter.between(profile.precipitation.0, profile.precipitation.1) as u8;
            let wind = self.jitter.between(profile.wind.0, profile.wind.1).max(0) as u32;

            entries.push(DailyEntry {
                day,
                date: date.format("%b %-d").to_string(),
                min_temp,
                max_temp,
                condition,
                humidity,
                precipitation,
                wind,
            });

            running += self.jitter.between(-2, 2) as i32;
        }

        entries
    }

    fn temperature_series(&mut self, base_temp: i32) -> Vec<TemperaturePoint> {
        SERIES_HOURS
            .iter()
            .zip(TEMP_CURVE)
            .map(|(time, offset)| TemperaturePoint {
                time: (*time).to_string(),
                temp: base_temp + offset + self.jitter.between(-1, 1) as i32,
            })
            .collect()
    }

    fn wind_series(&mut self, avg_wind: u32) -> Vec<WindPoint> {
        SERIES_HOURS
            .iter()
            .map(|time| WindPoint {
                time: (*time).to_string(),
                speed: (i64::from(avg_wind) + self.jitter.between(-4, 4)).max(0) as u32,
            })
            .collect()
    }

    fn humidity_series(&mut self, avg_humidity: u8) -> Vec<HumidityPoint> {
        SERIES_HOURS
            .iter()
            .zip(HUMIDITY_CURVE)
            .map(|(time, offset)| HumidityPoint {
                time: (*time).to_string(),
                humidity: (i32::from(avg_humidity) + offset + self.jitter.between(-3, 3) as i32)
                    .clamp(0, 100) as u8,
            })
            .collect()
    }

    fn uv_series(&mut self, max_uv: u8) -> Vec<UvPoint> {
        SERIES_HOURS
            .iter()
            .zip(UV_CURVE)
            .map(|(time, fraction)| {
                let noise = 1.0 + self.jitter.between(-10, 10) as f64 / 100.0;
                UvPoint {
                    time: (*time).to_string(),
                    index: (f64::from(max_uv) * fraction * noise).round().clamp(0.0, 10.0) as u8,
                }
            })
            .collect()
    }
}

/// 12-hour clock label for an hour in `0..=23`.
fn hour_label(hour: u32) -> String {
    match hour {
        0 => "12AM".to_string(),
        12 => "12PM".to_string(),
        h if h > 12 => format!("{}PM", h - 12),
        h => format!("{h}AM"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    /// Unit draws fixed at 0.5, integer draws at the range midpoint.
    struct MidJitter;

    impl Jitter for MidJitter {
        fn unit(&mut self) -> f64 {
            0.5
        }

        fn between(&mut self, min: i64, max: i64) -> i64 {
            (min + max) / 2
        }
    }

    /// Seed stream pinned to one value for every draw.
    struct PinnedStream(f64);

    impl SeedStream for PinnedStream {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn base_quantities_are_stable_per_city_and_day() {
        let mut generator = SyntheticGenerator::new();
        let now = noon(2025, 4, 15);

        let a = generator.generate_at("Springfield", now);
        let b = generator.generate_at("Springfield", now);

        assert_eq!(a.temperature, b.temperature);
        assert_eq!(a.humidity, b.humidity);
        assert_eq!(a.wind, b.wind);
        assert_eq!(a.feels_like, b.feels_like);
        assert_eq!(a.pressure, b.pressure);
        assert_eq!(a.uv_index, b.uv_index);
    }

    #[test]
    fn pinned_stream_reproduces_worked_example() {
        // Every seeded draw at 0.5: temp 20, humidity 60, wind 18,
        // feels-like 19, pressure 1015, max UV 5.
        let mut generator = SyntheticGenerator::new();
        let data = generator.generate_with_stream(
            &mut PinnedStream(0.5),
            "Springfield",
            noon(2025, 4, 15),
        );

        assert_eq!(data.temperature, 20);
        assert_eq!(data.humidity, 60);
        assert_eq!(data.wind, 18);
        assert_eq!(data.feels_like, 19);
        assert_eq!(data.pressure, 1015);
        assert_eq!(data.uv_index, 5);
    }

    #[test]
    fn sequences_have_fixed_lengths_and_labels() {
        let mut generator = SyntheticGenerator::new();
        let data = generator.generate_at("Tokyo", noon(2025, 4, 15));

        assert_eq!(data.hourly_forecast.len(), 12);
        assert_eq!(data.weekly_forecast.len(), 7);

        assert_eq!(data.hourly_forecast[0].time, "Now");
        assert_eq!(data.hourly_forecast[0].temperature, data.temperature);
        assert_eq!(data.hourly_forecast[0].condition, data.condition);

        for series_times in [
            data.temperature_series.iter().map(|p| p.time.as_str()).collect::<Vec<_>>(),
            data.wind_series.iter().map(|p| p.time.as_str()).collect(),
            data.humidity_series.iter().map(|p| p.time.as_str()).collect(),
            data.uv_series.iter().map(|p| p.time.as_str()).collect(),
        ] {
            assert_eq!(series_times, SERIES_HOURS);
        }
    }

    #[test]
    fn hourly_labels_follow_the_clock() {
        let mut generator = SyntheticGenerator::new();
        let data = generator.generate_at("Lisbon", noon(2025, 4, 15));

        let labels: Vec<&str> = data.hourly_forecast.iter().map(|e| e.time.as_str()).collect();
        assert_eq!(
            labels,
            ["Now", "1PM", "2PM", "3PM", "4PM", "5PM", "6PM", "7PM", "8PM", "9PM", "10PM", "11PM"]
        );

        // Crossing midnight exercises the 12AM special case.
        let evening = NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        let data = generator.generate_at("Lisbon", evening);
        assert_eq!(data.hourly_forecast[1].time, "12AM");
        assert_eq!(data.hourly_forecast[2].time, "1AM");
    }

    #[test]
    fn weekly_labels_start_with_today_and_tomorrow() {
        let mut generator = SyntheticGenerator::new();
        // 2025-04-15 is a Tuesday.
        let data = generator.generate_at("Oslo", noon(2025, 4, 15));

        let days: Vec<&str> = data.weekly_forecast.iter().map(|e| e.day.as_str()).collect();
        assert_eq!(
            days,
            ["Today", "Tomorrow", "Thursday", "Friday", "Saturday", "Sunday", "Monday"]
        );
        assert_eq!(data.weekly_forecast[0].date, "Apr 15");
        assert_eq!(data.weekly_forecast[6].date, "Apr 21");
    }

    #[test]
    fn base_quantities_stay_in_range() {
        let mut generator = SyntheticGenerator::new();
        let now = noon(2025, 4, 15);

        for i in 0..1000 {
            let data = generator.generate_at(&format!("City {i}"), now);
            assert!((5..=35).contains(&data.temperature), "temp {}", data.temperature);
            assert!((40..=80).contains(&data.humidity), "humidity {}", data.humidity);
            assert!((5..=30).contains(&data.wind), "wind {}", data.wind);
            assert!((1000..=1030).contains(&data.pressure), "pressure {}", data.pressure);
            assert!(data.uv_index <= 10, "uv {}", data.uv_index);
        }
    }

    #[test]
    fn series_respect_clamps() {
        let mut generator = SyntheticGenerator::new();
        let now = noon(2025, 4, 15);

        for i in 0..200 {
            let data = generator.generate_at(&format!("City {i}"), now);
            for p in &data.humidity_series {
                assert!(p.humidity <= 100);
            }
            for p in &data.uv_series {
                assert!(p.index <= 10);
            }
            // WindPoint::speed is unsigned; generation must not have
            // wrapped a negative sample.
            for p in &data.wind_series {
                assert!(p.speed <= data.wind + 4);
            }
        }
    }

    #[test]
    fn uv_series_is_dark_by_evening() {
        let mut generator = SyntheticGenerator::with_jitter(MidJitter);
        let data = generator.generate_at("Quito", noon(2025, 4, 15));

        let last = data.uv_series.last().unwrap();
        assert_eq!(last.index, 0, "9PM UV should be zero");
        // Noon carries the full peak.
        assert_eq!(data.uv_series[2].index, data.uv_index);
    }

    #[test]
    fn weekly_spread_widens_with_forecast_distance() {
        const TRIALS: usize = 400;

        let mut generator = SyntheticGenerator::new();
        let now = noon(2025, 4, 15);
        let mut mean_spread = [0.0f64; 7];

        for _ in 0..TRIALS {
            let data = generator.generate_at("Springfield", now);
            for (i, day) in data.weekly_forecast.iter().enumerate() {
                mean_spread[i] += f64::from(day.max_temp - day.min_temp) / TRIALS as f64;
            }
        }

        for i in 0..6 {
            assert!(
                mean_spread[i + 1] > mean_spread[i] - 0.5,
                "spread shrank from day {i} ({:.2}) to day {} ({:.2})",
                mean_spread[i],
                i + 1,
                mean_spread[i + 1]
            );
        }
    }

    #[test]
    fn daily_stats_match_condition_profiles() {
        let mut generator = SyntheticGenerator::new();
        let now = noon(2025, 4, 15);

        for i in 0..200 {
            let data = generator.generate_at(&format!("City {i}"), now);
            for day in &data.weekly_forecast {
                let p = day.condition.daily_profile();
                let humidity = i64::from(day.humidity);
                let precipitation = i64::from(day.precipitation);
                let wind = i64::from(day.wind);
                assert!(
                    (p.humidity.0..=p.humidity.1).contains(&humidity),
                    "{}: humidity {humidity} outside profile",
                    day.condition
                );
                assert!(
                    (p.precipitation.0..=p.precipitation.1).contains(&precipitation),
                    "{}: precipitation {precipitation} outside profile",
                    day.condition
                );
                assert!(
                    (p.wind.0..=p.wind.1).contains(&wind),
                    "{}: wind {wind} outside profile",
                    day.condition
                );
            }
        }
    }

    #[test]
    fn empty_city_name_still_generates() {
        let mut generator = SyntheticGenerator::new();
        let data = generator.generate_at("", noon(2025, 4, 15));

        assert_eq!(data.city, "");
        assert!((5..=35).contains(&data.temperature));
        assert_eq!(data.hourly_forecast.len(), 12);
        assert_eq!(data.weekly_forecast.len(), 7);
    }

    #[test]
    fn hour_label_handles_clock_edges() {
        assert_eq!(hour_label(0), "12AM");
        assert_eq!(hour_label(1), "1AM");
        assert_eq!(hour_label(11), "11AM");
        assert_eq!(hour_label(12), "12PM");
        assert_eq!(hour_label(13), "1PM");
        assert_eq!(hour_label(23), "11PM");
    }
}
