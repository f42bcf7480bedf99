use tracing::debug;

use crate::client::ForecastService;
use crate::error::ForecastError;
use crate::model::{ForecastInput, ForecastReport};

/// What the frontend shows. Exactly one variant at a time, so a stale
/// result and a stale error can never coexist.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(ForecastReport),
    Error(String),
}

/// Drives the submit lifecycle: Idle -> Loading -> Success | Error.
///
/// Every submission gets a sequence number and only the latest one may
/// settle the state. Overlapping submissions therefore resolve to "latest
/// submission wins" instead of "last response to arrive wins".
#[derive(Debug, Default)]
pub struct ForecastSession {
    state: ViewState,
    latest_seq: u64,
}

impl ForecastSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// True while a submission is in flight. Callers use this to disable
    /// the submit control.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    /// Start a submission: discard any previous outcome and enter Loading.
    /// Returns the sequence number to hand back to [`finish`](Self::finish).
    pub fn begin(&mut self) -> u64 {
        self.latest_seq += 1;
        self.state = ViewState::Loading;
        self.latest_seq
    }

    /// Settle a submission. Completions that are stale (not the latest
    /// submission) or arrive after the latest one already settled are
    /// discarded and return false, so Loading is left exactly once.
    pub fn finish(
        &mut self,
        seq: u64,
        outcome: Result<ForecastReport, ForecastError>,
    ) -> bool {
        if seq != self.latest_seq || !self.is_loading() {
            debug!(seq, latest = self.latest_seq, "discarding stale completion");
            return false;
        }

        self.state = match outcome {
            Ok(report) => ViewState::Success(report),
            Err(err) => ViewState::Error(err.to_string()),
        };

        true
    }

    /// Run one full submission against `service`: enter Loading before the
    /// request goes out, leave it exactly once whatever the outcome.
    pub async fn submit(
        &mut self,
        service: &dyn ForecastService,
        input: &ForecastInput,
    ) -> &ViewState {
        let seq = self.begin();
        let outcome = service.fetch_forecast(input).await;
        self.finish(seq, outcome);
        &self.state
    }
}
