//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Credentials handling (`secrets.toml`)
//! - The OpenWeather query builder and fetcher
//! - Display formatting and ANSI styling for the weather line
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries.
//! Nothing here prints to stdout or terminates the process; failures are
//! returned as [`Error`] values for the caller to surface.

pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod openweather;
pub mod style;

pub use config::Secrets;
pub use error::Error;
pub use model::{Condition, CurrentWeather};
pub use openweather::OpenWeatherClient;
