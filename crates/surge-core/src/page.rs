//! Submission state machine for the load-test page.
//!
//! The page owns the form, the timer dialog flag, the last result and the
//! notification. Callers drive it with user events and the outcome of the
//! single POST; rendering reads the fields back.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::chart::ChartSeries;
use crate::countdown::Countdown;
use crate::form::{FormField, LoadTestForm};
use crate::request::LoadTestRequest;
use crate::result::LoadTestResult;
use crate::snackbar::{CloseReason, Snackbar, SnackbarVariant};

pub const SUCCESS_MESSAGE: &str = "Load test ran successfully!";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadTestPage {
    pub form: LoadTestForm,
    pub timer_dialog_open: bool,
    pub result: LoadTestResult,
    pub snackbar: Snackbar,
}

impl LoadTestPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_change(&mut self, field: FormField, raw: &str) {
        self.form.handle_change(field, raw);
    }

    /// Validate and open the timer dialog.
    ///
    /// Returns the request to POST, or `None` when the URL is missing (the
    /// form's `url_error` is then set and nothing should be sent).
    pub fn submit(&mut self) -> Option<LoadTestRequest> {
        let request = self.form.validate().ok()?;
        self.timer_dialog_open = true;
        Some(request)
    }

    /// Backend answered. A missing payload leaves the page untouched.
    pub fn complete(&mut self, result: Option<LoadTestResult>) {
        let Some(result) = result else { return };

        self.result = result;
        self.timer_dialog_open = false;
        self.snackbar.show(SnackbarVariant::Success, SUCCESS_MESSAGE);
    }

    pub fn fail(&mut self, error: impl Display) {
        self.timer_dialog_open = false;
        self.snackbar.show(
            SnackbarVariant::Error,
            format!("Load test did not run successfully with msg: {}", error),
        );
    }

    /// Close button or countdown completion
    pub fn close_timer_dialog(&mut self) {
        self.timer_dialog_open = false;
    }

    pub fn close_snackbar(&mut self, reason: CloseReason) {
        self.snackbar.close(reason);
    }

    pub fn countdown(&self) -> Countdown {
        Countdown::from_minutes(self.form.t)
    }

    pub fn chart(&self) -> ChartSeries {
        ChartSeries::from_result(&self.result)
    }
}
