use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const AUTO_HIDE: Duration = Duration::from_millis(6000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackbarVariant {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl SnackbarVariant {
    pub fn label(&self) -> &'static str {
        match self {
            SnackbarVariant::Success => "success",
            SnackbarVariant::Error => "error",
            SnackbarVariant::Warning => "warning",
            SnackbarVariant::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Timeout,
    /// Click outside the notification; never closes it
    Clickaway,
    Dismissed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snackbar {
    pub open: bool,
    pub variant: SnackbarVariant,
    pub message: String,
}

impl Snackbar {
    pub fn show(&mut self, variant: SnackbarVariant, message: impl Into<String>) {
        self.open = true;
        self.variant = variant;
        self.message = message.into();
    }

    pub fn close(&mut self, reason: CloseReason) {
        if reason == CloseReason::Clickaway {
            return;
        }
        self.open = false;
    }
}
