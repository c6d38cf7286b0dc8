//! OpenWeatherMap current-weather client
//!
//! Async side effects are isolated here: an intent action spawns a task
//! that calls `WeatherClient::current_weather` and sends the result back
//! as an action. No async in the reducer or components.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::state::{Condition, Temperature, WeatherSnapshot, Wind};

/// Errors produced by a weather lookup.
///
/// Display strings are shown to the user verbatim, so they carry the
/// fixed user-facing messages rather than transport detail; the detail
/// stays available through the error source chain and the logs.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The provider rejected the query (any non-success status).
    #[error("City not found. Please try another location.")]
    CityNotFound,

    /// The request never completed or the body could not be decoded.
    #[error("Failed to fetch weather data")]
    Transport(#[from] reqwest::Error),

    /// Success status but the body is missing the condition entry.
    #[error("Failed to fetch weather data")]
    MalformedResponse,
}

/// HTTP client for the current-weather endpoint.
#[derive(Clone, Debug)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("weather-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch current weather for a city by name.
    pub async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!(
            "{}/weather?q={}&units=metric&appid={}",
            self.base_url,
            urlencoding::encode(city),
            self.api_key,
        );

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(city, error = %e, "weather request failed");
            WeatherError::Transport(e)
        })?;

        if !response.status().is_success() {
            warn!(city, status = %response.status(), "weather lookup rejected");
            return Err(WeatherError::CityNotFound);
        }

        let body: CurrentWeatherResponse = response.json().await?;
        let snapshot = body.into_snapshot()?;
        debug!(
            city,
            temp = snapshot.temperature.current,
            condition = %snapshot.condition.category,
            "weather snapshot received"
        );
        Ok(snapshot)
    }
}

// ============================================================================
// Response shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    name: String,
    sys: SysSection,
    weather: Vec<ConditionSection>,
    main: MainSection,
    wind: WindSection,
    visibility: u32,
}

#[derive(Debug, Deserialize)]
struct SysSection {
    country: String,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: u32,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindSection {
    speed: f64,
    deg: u16,
}

impl CurrentWeatherResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MalformedResponse)?;

        Ok(WeatherSnapshot {
            location_name: self.name,
            country_code: self.sys.country,
            condition: Condition {
                category: condition.main,
                description: condition.description,
            },
            temperature: Temperature {
                current: self.main.temp,
                feels_like: self.main.feels_like,
                min: self.main.temp_min,
                max: self.main.temp_max,
            },
            humidity_percent: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind: Wind {
                speed_mps: self.wind.speed,
                direction_deg: self.wind.deg,
            },
            visibility_meters: self.visibility,
        })
    }
}
