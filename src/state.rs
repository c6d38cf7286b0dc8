//! Application state - single source of truth
//!
//! Components receive `&SearchState` as props; only the reducer mutates
//! it, through the small set of transition methods below.

/// Milliseconds between spinner animation ticks.
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Weather condition reported by the provider.
///
/// `category` is the provider's coarse class ("Clear", "Clouds", "Rain",
/// ...) and drives icon selection; `description` is free text shown
/// verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub category: String,
    pub description: String,
}

/// Temperature readings in °C.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Temperature {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
}

/// Wind reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wind {
    pub speed_mps: f64,
    pub direction_deg: u16,
}

/// An immutable point-in-time weather reading for one location.
///
/// Snapshots are built once from a provider response and replaced
/// wholesale, never patched field by field.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country_code: String,
    pub condition: Condition,
    pub temperature: Temperature,
    pub humidity_percent: u8,
    pub pressure_hpa: u32,
    pub wind: Wind,
    pub visibility_meters: u32,
}

impl WeatherSnapshot {
    /// "London, GB"
    pub fn location_line(&self) -> String {
        format!("{}, {}", self.location_name, self.country_code)
    }

    /// Current temperature rounded to the nearest integer, e.g. "20°C".
    pub fn current_temp(&self) -> String {
        format_celsius(self.temperature.current)
    }

    /// Feels-like temperature, same rounding as `current_temp`.
    pub fn feels_like_temp(&self) -> String {
        format_celsius(self.temperature.feels_like)
    }

    /// "18°/22°" - rounded daily min and max.
    pub fn min_max(&self) -> String {
        format!(
            "{}°/{}°",
            self.temperature.min.round() as i64,
            self.temperature.max.round() as i64
        )
    }

    /// Humidity as integer percent, e.g. "65%".
    pub fn humidity(&self) -> String {
        format!("{}%", self.humidity_percent)
    }

    /// Wind speed in m/s as reported, no rounding.
    pub fn wind_speed(&self) -> String {
        format!("{} m/s", self.wind.speed_mps)
    }

    /// Pressure in hPa as reported.
    pub fn pressure(&self) -> String {
        format!("{} hPa", self.pressure_hpa)
    }

    /// Visibility converted to kilometers with one decimal, e.g. "10.0 km".
    pub fn visibility_km(&self) -> String {
        format!("{:.1} km", self.visibility_meters as f64 / 1000.0)
    }
}

/// Format a °C reading rounded to the nearest integer.
pub fn format_celsius(celsius: f64) -> String {
    format!("{}°C", celsius.round() as i64)
}

/// State of the search form and the outstanding lookup, if any.
///
/// Invariant: at most one of `error` / `snapshot` is populated once a
/// request settles; success clears the error and failure clears the
/// snapshot. While `loading` is true the view shows neither.
#[derive(Clone, Debug)]
pub struct SearchState {
    /// Free-text city name, edited by the search bar.
    pub search_term: String,

    /// True strictly between request dispatch and its resolution.
    pub loading: bool,

    /// Message from the last failed lookup.
    pub error: Option<String>,

    /// Result of the last successful lookup.
    pub snapshot: Option<WeatherSnapshot>,

    /// Animation frame counter for the loading spinner.
    pub tick_count: u32,

    /// Sequence number of the most recently issued request. Responses
    /// carrying an older number are stale and must be discarded.
    issued_seq: u64,
}

impl SearchState {
    /// Create state with the given initial search term.
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            search_term: default_city.into(),
            loading: false,
            error: None,
            snapshot: None,
            tick_count: 0,
            issued_seq: 0,
        }
    }

    /// Mark a new request as in flight and return its sequence number.
    ///
    /// Clears the previous error; the previous snapshot is kept but the
    /// view hides it while `loading` is set.
    pub fn begin_request(&mut self) -> u64 {
        self.issued_seq += 1;
        self.loading = true;
        self.error = None;
        self.issued_seq
    }

    /// Whether `seq` identifies the most recently issued request.
    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued_seq
    }

    /// Settle the request with a successful snapshot.
    pub fn settle_ok(&mut self, snapshot: WeatherSnapshot) {
        self.snapshot = Some(snapshot);
        self.error = None;
        self.loading = false;
    }

    /// Settle the request with an error message.
    pub fn settle_err(&mut self, message: String) {
        self.error = Some(message);
        self.snapshot = None;
        self.loading = false;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new("London")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "London".into(),
            country_code: "GB".into(),
            condition: Condition {
                category: "Clear".into(),
                description: "clear sky".into(),
            },
            temperature: Temperature {
                current: 20.0,
                feels_like: 19.0,
                min: 18.0,
                max: 22.0,
            },
            humidity_percent: 65,
            pressure_hpa: 1015,
            wind: Wind {
                speed_mps: 4.12,
                direction_deg: 300,
            },
            visibility_meters: 10000,
        }
    }

    #[test]
    fn temperature_rounds_to_integer() {
        assert_eq!(format_celsius(20.0), "20°C");
        assert_eq!(format_celsius(19.6), "20°C");
        assert_eq!(format_celsius(-3.4), "-3°C");
    }

    #[test]
    fn visibility_one_decimal_km() {
        let mut snapshot = sample_snapshot();
        assert_eq!(snapshot.visibility_km(), "10.0 km");

        snapshot.visibility_meters = 9400;
        assert_eq!(snapshot.visibility_km(), "9.4 km");
    }

    #[test]
    fn metric_formatting() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.location_line(), "London, GB");
        assert_eq!(snapshot.min_max(), "18°/22°");
        assert_eq!(snapshot.humidity(), "65%");
        assert_eq!(snapshot.wind_speed(), "4.12 m/s");
        assert_eq!(snapshot.pressure(), "1015 hPa");
    }

    #[test]
    fn begin_request_clears_error_and_bumps_seq() {
        let mut state = SearchState::default();
        state.error = Some("boom".into());

        let seq = state.begin_request();
        assert_eq!(seq, 1);
        assert!(state.loading);
        assert!(state.error.is_none());

        let seq = state.begin_request();
        assert_eq!(seq, 2);
        assert!(state.is_latest(2));
        assert!(!state.is_latest(1));
    }

    #[test]
    fn settled_state_is_mutually_exclusive() {
        let mut state = SearchState::default();
        state.begin_request();
        state.settle_ok(sample_snapshot());
        assert!(state.snapshot.is_some());
        assert!(state.error.is_none());
        assert!(!state.loading);

        state.begin_request();
        state.settle_err("City not found. Please try another location.".into());
        assert!(state.snapshot.is_none());
        assert!(state.error.is_some());
        assert!(!state.loading);
    }
}
