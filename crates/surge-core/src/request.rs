use serde::{Deserialize, Serialize};

use crate::Result;

pub const LOAD_TEST_PATH: &str = "/api/load-test";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Parameters posted to the load-test endpoint.
///
/// Field order is the wire order: `url`, `qps`, `c`, `t`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTestRequest {
    pub url: String,
    pub qps: u32,
    /// Concurrent requests
    pub c: u32,
    /// Duration in minutes
    pub t: u32,
}

impl LoadTestRequest {
    /// URL-encoded form body, keys and values percent-encoded.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_html_form::to_string(self)?)
    }
}
