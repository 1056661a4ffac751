use serde::{Deserialize, Serialize};

use crate::request::LoadTestRequest;
use crate::{Result, SurgeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Url,
    Qps,
    Concurrency,
    Duration,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Url,
            FormField::Concurrency,
            FormField::Qps,
            FormField::Duration,
        ]
    }

    /// Form-encoded key for this field
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Url => "url",
            FormField::Qps => "qps",
            FormField::Concurrency => "c",
            FormField::Duration => "t",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Url => "URL for the load test",
            FormField::Qps => "Queries per second",
            FormField::Concurrency => "Concurrent requests",
            FormField::Duration => "Duration in minutes",
        }
    }

    /// Input minimum; `None` for the free-text URL field
    pub fn min(&self) -> Option<u32> {
        match self {
            FormField::Url => None,
            FormField::Qps | FormField::Concurrency => Some(0),
            FormField::Duration => Some(1),
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, FormField::Url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTestForm {
    pub url: String,
    pub qps: u32,
    pub c: u32,
    pub t: u32,
    pub url_error: bool,
}

impl Default for LoadTestForm {
    fn default() -> Self {
        Self {
            url: String::new(),
            qps: 0,
            c: 0,
            t: 1,
            url_error: false,
        }
    }
}

impl LoadTestForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply raw input text to a field.
    ///
    /// Numeric input that does not parse keeps the previous value.
    pub fn handle_change(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::Url => {
                if !raw.is_empty() {
                    self.url_error = false;
                }
                self.url = raw.to_string();
            }
            FormField::Qps => Self::set_number(&mut self.qps, raw),
            FormField::Concurrency => Self::set_number(&mut self.c, raw),
            FormField::Duration => Self::set_number(&mut self.t, raw),
        }
    }

    fn set_number(slot: &mut u32, raw: &str) {
        if let Ok(n) = raw.trim().parse() {
            *slot = n;
        }
    }

    /// Current text value of a field, as bound to its input
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Url => self.url.clone(),
            FormField::Qps => self.qps.to_string(),
            FormField::Concurrency => self.c.to_string(),
            FormField::Duration => self.t.to_string(),
        }
    }

    /// Snapshot the form as a request, flagging the URL when it is empty.
    pub fn validate(&mut self) -> Result<LoadTestRequest> {
        if self.url.is_empty() {
            self.url_error = true;
            return Err(SurgeError::EmptyUrl);
        }

        Ok(LoadTestRequest {
            url: self.url.clone(),
            qps: self.qps,
            c: self.c,
            t: self.t,
        })
    }
}
