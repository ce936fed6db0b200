use serde::Deserialize;

use crate::error::Error;

/// Current-weather document returned by the OpenWeather city endpoint.
///
/// Only the fields the display line needs are modeled; the API sends more
/// and serde ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub weather: Vec<Condition>,
    pub main: Main,
}

/// One weather condition entry. The API may report several; the first is
/// representative.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub id: u16,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Main {
    pub temp: f64,
}

impl CurrentWeather {
    /// The representative condition entry.
    ///
    /// The API contract promises at least one entry; a document without any
    /// is treated as an error rather than defaulted.
    pub fn primary(&self) -> Result<&Condition, Error> {
        self.weather.first().ok_or(Error::NoConditions)
    }
}
