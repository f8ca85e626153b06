/// Unit reported by the fetcher. The widget has no unit selection.
pub const CELSIUS: &str = "C";

/// Display-ready outcome of one successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    pub temperature: f64,
    pub description: String,
    pub location: String,
    pub unit: String,
}

impl WeatherResult {
    pub fn celsius(temperature: f64, description: String, location: String) -> Self {
        Self { temperature, description, location, unit: CELSIUS.to_string() }
    }
}
