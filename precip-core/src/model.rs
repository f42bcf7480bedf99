use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed forecast form: one coordinate and one date range.
///
/// Coordinates stay the raw strings the user typed and travel verbatim;
/// the service decides whether they are usable numbers. The dates are
/// guaranteed valid by the flag parser and the date prompt.
#[derive(Debug, Clone)]
pub struct ForecastInput {
    pub latitude: String,
    pub longitude: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ForecastInput {
    /// Build the wire payload. The service wants the dates with an explicit
    /// hour marker: `2016-05-01` becomes `"2016-05-01T00"`.
    pub fn to_payload(&self) -> ForecastPayload {
        ForecastPayload {
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            start_date: format!("{}T00", self.start_date.format("%Y-%m-%d")),
            end_date: format!("{}T00", self.end_date.format("%Y-%m-%d")),
        }
    }
}

/// JSON body of the forecast request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub latitude: String,
    pub longitude: String,
    pub start_date: String,
    pub end_date: String,
}

/// JSON body of a successful forecast response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub metadata: ReportMetadata,
    pub monthly_averages: Vec<MonthlyAverage>,
    pub six_month_predictions: Vec<MonthPrediction>,
}

/// Summary block of a forecast response. Only the average is guaranteed;
/// the service usually echoes the query alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub average_daily_precip_mm: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub nasa_data_range_used: Option<String>,
    pub user_data_range: Option<String>,
}

/// Average precipitation for one month of the queried range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAverage {
    pub month: MonthId,
    pub data: f64,
}

/// Predicted precipitation for one month following the queried range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthPrediction {
    pub month: MonthId,
    pub predicted_avg_precip_mm: f64,
}

/// Month identifier as sent by the service: normally a calendar month
/// number, but the contract also allows a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthId {
    Number(u32),
    Name(String),
}

impl std::fmt::Display for MonthId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthId::Number(n) => write!(f, "{n}"),
            MonthId::Name(s) => f.write_str(s),
        }
    }
}
