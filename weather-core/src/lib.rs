//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration & API key handling
//! - The weather fetcher abstraction and its WeatherAPI.com implementation
//! - Message formatters for temperature, condition and time of day
//! - The widget state machine driven by submissions
//!
//! It is used by `weather-widget`, but any front-end can drive a [`Widget`]
//! and render its [`WidgetView`].

pub mod clock;
pub mod config;
pub mod fetcher;
pub mod format;
pub mod model;
pub mod widget;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use fetcher::{FetchError, WeatherApiFetcher, WeatherFetcher};
pub use format::{format_condition, format_location, format_temperature};
pub use model::WeatherResult;
pub use widget::{ErrorMessage, ResultLines, SubmitOutcome, Widget, WidgetState, WidgetView};
