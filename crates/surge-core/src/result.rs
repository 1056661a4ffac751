use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Run summary returned by the load-test backend.
///
/// Keys follow the backend's Fortio-style JSON. Every field is optional so
/// an empty object is a valid (empty) result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadTestResult {
    pub labels: String,
    pub start_time: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "RequestedQPS")]
    pub requested_qps: String,
    #[serde(rename = "ActualQPS")]
    pub actual_qps: f64,
    pub requested_duration: String,
    /// Nanoseconds
    pub actual_duration: u64,
    pub num_threads: u32,
    pub duration_histogram: DurationHistogram,
    pub ret_codes: BTreeMap<String, u64>,
}

/// Latency histogram; all times in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DurationHistogram {
    pub count: u64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub avg: f64,
    pub std_dev: f64,
    pub data: Vec<HistogramBucket>,
    pub percentiles: Vec<Percentile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HistogramBucket {
    pub start: f64,
    pub end: f64,
    /// Cumulative percentage up to `end`
    pub percent: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Percentile {
    pub percentile: f64,
    pub value: f64,
}

impl LoadTestResult {
    /// Decode a response body. A blank or `null` body carries no result.
    pub fn parse(body: &str) -> Result<Option<Self>> {
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(body)?))
    }

    pub fn is_empty(&self) -> bool {
        self.duration_histogram.count == 0 && self.duration_histogram.data.is_empty()
    }

    pub fn actual_duration(&self) -> Duration {
        Duration::from_nanos(self.actual_duration)
    }

    pub fn error_count(&self) -> u64 {
        self.ret_codes
            .iter()
            .filter(|(code, _)| !code.starts_with('2'))
            .map(|(_, n)| n)
            .sum()
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_RESULT: &str = r#"{
    "Labels": "checkout",
    "StartTime": "2024-03-01T10:00:00Z",
    "URL": "http://svc:8080/",
    "RequestedQPS": "100",
    "ActualQPS": 99.7,
    "RequestedDuration": "1m0s",
    "ActualDuration": 60012000000,
    "NumThreads": 8,
    "DurationHistogram": {
        "Count": 5982,
        "Min": 0.0008,
        "Max": 0.0412,
        "Sum": 16.2,
        "Avg": 0.0027,
        "StdDev": 0.0011,
        "Data": [
            {"Start": 0.0008, "End": 0.002, "Percent": 40.0, "Count": 2393},
            {"Start": 0.002, "End": 0.003, "Percent": 85.0, "Count": 2692},
            {"Start": 0.003, "End": 0.0412, "Percent": 100.0, "Count": 897}
        ],
        "Percentiles": [
            {"Percentile": 50, "Value": 0.0023},
            {"Percentile": 99, "Value": 0.0061}
        ]
    },
    "RetCodes": {"200": 5970, "503": 12}
}"#;
