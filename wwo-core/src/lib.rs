//! Core library for the `wwo` World Weather Online client.
//!
//! This crate defines:
//! - The request URL builder and HTTP fetch
//! - The typed response model (current conditions, past days, request echo)
//! - The static condition code lookup
//! - Configuration & credentials handling
//!
//! It is used by `wwo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod codes;
pub mod config;
mod de;
pub mod error;
pub mod model;

pub use client::{Fetch, HttpFetcher, WeatherClient, build_url, get_weather, parse};
pub use codes::{Category, WEATHER_CATEGORIES, WEATHER_TYPES, describe};
pub use config::Config;
pub use error::{ErrorKind, WeatherError};
pub use model::{CurrentCondition, PastWeatherDay, RequestEcho, WeatherQuery, WeatherReport};
