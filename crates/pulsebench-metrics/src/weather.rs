//! Current-weather response parsing and unit conversion.

use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

use crate::error::{MetricsError, MetricsResult};
use crate::publisher::MetricFormat;
use crate::record::{MetricRecord, format_float};

/// CSV columns of the weather log.
pub const WEATHER_CSV_HEADER: &[&str] = &[
    "date",
    "time",
    "Temp (°C)",
    "Rain (mm)",
    "Wind Speed (km/h)",
    "Gust (km/h)",
    "Snow (mm)",
];

/// Measurement name of written points.
pub const WEATHER_MEASUREMENT: &str = "weather";

const KELVIN_OFFSET: f64 = 273.15;
const MS_TO_KMH: f64 = 3.6;

// Subset of the OpenWeatherMap current-weather payload.

#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: Option<OwmMain>,
    rain: Option<OwmPrecipitation>,
    snow: Option<OwmPrecipitation>,
    wind: Option<OwmWind>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwmPrecipitation {
    #[serde(rename = "1h", default)]
    one_hour: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    gust: f64,
}

/// One weather observation in metric units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temp_celsius: f64,
    pub rain_mm: f64,
    pub windspeed_kmh: f64,
    pub gust_kmh: f64,
    pub snow_mm: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Kelvin to Celsius, two decimals.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    round2(kelvin - KELVIN_OFFSET)
}

/// Metres per second to kilometres per hour, two decimals.
pub fn ms_to_kmh(ms: f64) -> f64 {
    round2(ms * MS_TO_KMH)
}

/// Parse a current-weather JSON body.
///
/// `main.temp` is required. Rain, snow, wind speed and gust are reported
/// only when present and default to zero.
pub fn parse_weather(body: &str) -> MetricsResult<WeatherReading> {
    let response: OwmResponse = serde_json::from_str(body)?;

    let kelvin = response
        .main
        .and_then(|m| m.temp)
        .ok_or(MetricsError::MissingField("main.temp"))?;
    let (speed, gust) = response.wind.map_or((0.0, 0.0), |w| (w.speed, w.gust));

    Ok(WeatherReading {
        temp_celsius: kelvin_to_celsius(kelvin),
        rain_mm: response.rain.map_or(0.0, |r| r.one_hour),
        windspeed_kmh: ms_to_kmh(speed),
        gust_kmh: ms_to_kmh(gust),
        snow_mm: response.snow.map_or(0.0, |s| s.one_hour),
    })
}

/// CSV and point layout for weather readings.
#[derive(Debug, Clone)]
pub struct WeatherFormat {
    location: String,
}

impl WeatherFormat {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl MetricFormat for WeatherFormat {
    type Reading = WeatherReading;

    fn name(&self) -> &'static str {
        "weather"
    }

    fn parse(&self, raw: &str) -> MetricsResult<WeatherReading> {
        parse_weather(raw)
    }

    fn csv_header(&self) -> &'static [&'static str] {
        WEATHER_CSV_HEADER
    }

    fn csv_row(&self, reading: &WeatherReading, at: DateTime<Local>) -> Vec<String> {
        vec![
            at.format("%Y%m%d").to_string(),
            at.format("%H:%M").to_string(),
            format_float(reading.temp_celsius),
            format_float(reading.rain_mm),
            format_float(reading.windspeed_kmh),
            format_float(reading.gust_kmh),
            format_float(reading.snow_mm),
        ]
    }

    /// Stamped with the observation time, truncated to whole seconds.
    fn record(&self, reading: &WeatherReading, at: DateTime<Utc>) -> MetricRecord {
        let stamp = DateTime::from_timestamp(at.timestamp(), 0).unwrap_or(at);
        MetricRecord::new(WEATHER_MEASUREMENT)
            .with_tag("location", &self.location)
            .with_field("temp_celsius", reading.temp_celsius)
            .with_field("rain_mm", reading.rain_mm)
            .with_field("windspeed_kmh", reading.windspeed_kmh)
            .with_field("gust_kmh", reading.gust_kmh)
            .with_field("snow_mm", reading.snow_mm)
            .with_timestamp(stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const BERLIN: &str = r#"{
        "coord": {"lon": 13.41, "lat": 52.52},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
        "main": {"temp": 300.0, "feels_like": 301.2, "pressure": 1012, "humidity": 40},
        "wind": {"speed": 5.0, "deg": 240, "gust": 10.0},
        "rain": {"1h": 0.42},
        "dt": 1714564800,
        "name": "Berlin",
        "cod": 200
    }"#;

    #[test]
    fn test_conversions() {
        assert!((kelvin_to_celsius(300.0) - 26.85).abs() < 1e-9);
        assert!((kelvin_to_celsius(273.15)).abs() < 1e-9);
        assert!((ms_to_kmh(5.0) - 18.0).abs() < 1e-9);
        assert!((ms_to_kmh(3.33) - 11.99).abs() < 1e-9);
    }

    #[test]
    fn test_parse_full_body() {
        let reading = parse_weather(BERLIN).unwrap();
        assert_eq!(
            reading,
            WeatherReading {
                temp_celsius: 26.85,
                rain_mm: 0.42,
                windspeed_kmh: 18.0,
                gust_kmh: 36.0,
                snow_mm: 0.0,
            }
        );
    }

    #[test]
    fn test_optional_sections_default_to_zero() {
        let reading = parse_weather(r#"{"main": {"temp": 280.0}}"#).unwrap();
        assert!((reading.temp_celsius - 6.85).abs() < 1e-9);
        assert_eq!(reading.rain_mm, 0.0);
        assert_eq!(reading.snow_mm, 0.0);
        assert_eq!(reading.windspeed_kmh, 0.0);
        assert_eq!(reading.gust_kmh, 0.0);

        let calm = parse_weather(r#"{"main": {"temp": 280.0}, "wind": {"speed": 1.0}}"#).unwrap();
        assert!((calm.windspeed_kmh - 3.6).abs() < 1e-9);
        assert_eq!(calm.gust_kmh, 0.0);
    }

    #[test]
    fn test_temperature_only_body() {
        let reading = parse_weather(r#"{"main":{"temp":300.0}}"#).unwrap();
        assert!((reading.temp_celsius - 26.85).abs() < 1e-9);
        assert_eq!(reading.rain_mm, 0.0);
        assert_eq!(reading.windspeed_kmh, 0.0);
        assert_eq!(reading.gust_kmh, 0.0);
        assert_eq!(reading.snow_mm, 0.0);
    }

    #[test]
    fn test_missing_temperature() {
        assert!(matches!(
            parse_weather(r#"{"wind": {"speed": 1.0}}"#),
            Err(MetricsError::MissingField("main.temp"))
        ));
        assert!(matches!(
            parse_weather(r#"{"main": {"humidity": 50}}"#),
            Err(MetricsError::MissingField("main.temp"))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_weather("<html>502</html>"),
            Err(MetricsError::Json(_))
        ));
    }

    #[test]
    fn test_csv_row() {
        let format = WeatherFormat::new("Berlin");
        let reading = parse_weather(BERLIN).unwrap();
        let at = Local.with_ymd_and_hms(2024, 5, 1, 14, 30, 0).unwrap();

        assert_eq!(
            format.csv_row(&reading, at),
            vec!["20240501", "14:30", "26.85", "0.42", "18.0", "36.0", "0.0"]
        );
    }

    #[test]
    fn test_record_has_whole_second_timestamp() {
        let format = WeatherFormat::new("Berlin");
        let reading = parse_weather(BERLIN).unwrap();
        let at = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(750))
            .unwrap();

        let line = format.record(&reading, at).to_line_protocol();
        assert_eq!(
            line,
            "weather,location=Berlin gust_kmh=36.0,rain_mm=0.42,snow_mm=0.0,temp_celsius=26.85,windspeed_kmh=18.0 1714564800000000000"
        );
    }
}
