use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use precip_core::{Config, ForecastClient, ForecastSession, ViewState};
use tracing::info;

use crate::{form, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "precip", version, about = "Precipitation forecast CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch precipitation averages and predictions for a coordinate and
    /// date range. Missing fields are asked for interactively.
    Fetch {
        /// Latitude, e.g. "38.89".
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<String>,

        /// Longitude, e.g. "-88.18".
        #[arg(long, allow_negative_numbers = true)]
        longitude: Option<String>,

        /// First day of the range, e.g. "2016-05-01".
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last day of the range, e.g. "2016-05-31".
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },

    /// Show the forecast service address, or set a new one.
    Endpoint {
        /// New address, e.g. "http://localhost:5000/api/weather".
        url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Fetch {
                latitude,
                longitude,
                start_date,
                end_date,
            } => {
                // Fully scripted invocations run once; anything that needed a
                // prompt keeps the form open for further submissions.
                let interactive = latitude.is_none()
                    || longitude.is_none()
                    || start_date.is_none()
                    || end_date.is_none();

                let config = Config::load()?;
                let client = ForecastClient::new(config.endpoint_url());
                info!(endpoint = client.endpoint(), "using forecast service");

                let mut session = ForecastSession::new();
                let mut input = form::complete_input(latitude, longitude, start_date, end_date)?;

                loop {
                    println!("{}", output::loading_line());

                    match session.submit(&client, &input).await {
                        ViewState::Success(report) => print!("{}", output::render_report(report)),
                        ViewState::Error(message) => eprintln!("{}", output::error_line(message)),
                        // submit always settles into Success or Error
                        ViewState::Idle | ViewState::Loading => {}
                    }

                    if !interactive || !form::confirm_another()? {
                        break;
                    }

                    input = form::complete_input(None, None, None, None)?;
                }

                if matches!(session.state(), ViewState::Error(_)) {
                    std::process::exit(1);
                }

                Ok(())
            }

            Command::Endpoint { url } => {
                let mut config = Config::load()?;

                match url {
                    Some(url) => {
                        config.set_endpoint(url);
                        config.save()?;
                        println!("Endpoint set to {}", config.endpoint_url());
                    }
                    None => println!("{}", config.endpoint_url()),
                }

                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn fetch_parses_all_four_fields() {
        let cli = Cli::try_parse_from([
            "precip",
            "fetch",
            "--latitude",
            "38.89",
            "--longitude",
            "-88.18",
            "--start-date",
            "2016-05-01",
            "--end-date",
            "2016-05-31",
        ])
        .expect("valid invocation parses");

        match cli.command {
            Command::Fetch {
                latitude,
                longitude,
                start_date,
                end_date,
            } => {
                assert_eq!(latitude.as_deref(), Some("38.89"));
                assert_eq!(longitude.as_deref(), Some("-88.18"));
                assert_eq!(
                    start_date,
                    NaiveDate::from_ymd_opt(2016, 5, 1)
                );
                assert_eq!(end_date, NaiveDate::from_ymd_opt(2016, 5, 31));
            }
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn fetch_rejects_invalid_dates() {
        let result =
            Cli::try_parse_from(["precip", "fetch", "--start-date", "not-a-date"]);

        assert!(result.is_err());
    }

    #[test]
    fn endpoint_url_is_optional() {
        let cli = Cli::try_parse_from(["precip", "endpoint"]).expect("valid invocation parses");

        assert!(matches!(cli.command, Command::Endpoint { url: None }));
    }
}
