//! Core library for the `precip` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The forecast service client and its error taxonomy
//! - The submit lifecycle shared with frontends
//!
//! It is used by `precip-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod session;

pub use client::{DEFAULT_ENDPOINT, ForecastClient, ForecastService};
pub use config::Config;
pub use error::{ForecastError, UNKNOWN_ERROR};
pub use model::{
    ForecastInput, ForecastPayload, ForecastReport, MonthId, MonthlyAverage, MonthPrediction,
    ReportMetadata,
};
pub use session::{ForecastSession, ViewState};
