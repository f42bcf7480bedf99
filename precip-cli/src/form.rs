//! The interactive forecast form: four required fields, prompted one at a
//! time when the matching CLI flag was not given.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use inquire::validator::ValueRequiredValidator;
use inquire::{Confirm, DateSelect, Text};
use precip_core::ForecastInput;

/// Help copy shown with the date prompts. The range is a hint, not a rule:
/// the service itself rejects out-of-range dates.
const DATE_RANGE_HINT: &str = "Pick a date between 2015 and 2020";

/// Fill in whatever the flags did not provide. Every field is required; the
/// prompts refuse empty coordinates and only ever produce valid dates.
pub fn complete_input(
    latitude: Option<String>,
    longitude: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<ForecastInput> {
    let latitude = match latitude {
        Some(value) => value,
        None => prompt_coordinate("Latitude", "e.g. 38.89")?,
    };

    let longitude = match longitude {
        Some(value) => value,
        None => prompt_coordinate("Longitude", "e.g. -88.18")?,
    };

    let start_date = match start_date {
        Some(value) => value,
        None => prompt_date("Start date")?,
    };

    let end_date = match end_date {
        Some(value) => value,
        None => prompt_date("End date")?,
    };

    Ok(ForecastInput {
        latitude,
        longitude,
        start_date,
        end_date,
    })
}

fn prompt_coordinate(label: &str, placeholder: &str) -> Result<String> {
    Text::new(label)
        .with_placeholder(placeholder)
        .with_validator(ValueRequiredValidator::default())
        .prompt()
        .with_context(|| format!("{label} prompt aborted"))
}

fn prompt_date(label: &str) -> Result<NaiveDate> {
    DateSelect::new(label)
        .with_help_message(DATE_RANGE_HINT)
        .prompt()
        .with_context(|| format!("{label} prompt aborted"))
}

/// Asked after each outcome in interactive mode; the form stays usable
/// after an error.
pub fn confirm_another() -> Result<bool> {
    Confirm::new("Submit another request?")
        .with_default(false)
        .prompt()
        .context("confirmation prompt aborted")
}
