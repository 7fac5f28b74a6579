//! Core library for the `forecast` weather timeline.
//!
//! This crate defines:
//! - Fetching the hourly Open-Meteo forecast for Rome
//! - Selecting the daytime hours and mapping WMO codes to glyphs
//! - Display surfaces (plain text, HTML) the timeline is written into
//!
//! It is used by `forecast-cli`, but the renderer takes any [`Timeline`], so
//! other front ends can reuse it.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod render;
pub mod renderer;
pub mod timeline;

pub use config::Config;
pub use error::ForecastError;
pub use icon::WeatherIcon;
pub use model::{Coordinates, DisplayItem, ForecastQuery, HourlyForecast};
pub use provider::{ForecastProvider, open_meteo::OpenMeteoProvider, provider_from_config};
pub use render::{HtmlTimeline, Notice, OutputFormat, TextTimeline, Timeline};
pub use renderer::{ForecastRenderer, RenderOutcome};
