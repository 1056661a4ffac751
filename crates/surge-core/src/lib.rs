pub mod chart;
pub mod config;
pub mod countdown;
pub mod error;
pub mod form;
pub mod page;
pub mod request;
pub mod result;
pub mod snackbar;

pub use chart::{ChartBar, ChartSeries, PercentileMarker};
pub use config::{BackendConfig, ServerConfig, SurgeConfig};
pub use countdown::{Countdown, CountdownState};
pub use error::{ErrorBody, Result, SurgeError};
pub use form::{FormField, LoadTestForm};
pub use page::LoadTestPage;
pub use request::{LoadTestRequest, FORM_CONTENT_TYPE, LOAD_TEST_PATH};
pub use result::{DurationHistogram, HistogramBucket, LoadTestResult, Percentile};
pub use snackbar::{CloseReason, Snackbar, SnackbarVariant, AUTO_HIDE};
