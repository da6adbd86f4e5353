//! Response shapes of the remote run/format backend.
//!
//! The backend itself is out of scope; these types only read its JSON and
//! turn it into the text an output pane and profiler show.

use serde::{Deserialize, Serialize};

/// Timing of one instrumented function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionTime {
    pub name: String,
    pub time_ms: f64,
}

/// Response of the run endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunResponse {
    pub success: bool,
    pub output: String,
    pub error: String,
    /// Data URLs of images the program wrote
    pub images: Vec<String>,
    pub compile_time_ms: Option<u64>,
    pub run_time_ms: Option<u64>,
    pub total_time_ms: Option<u64>,
    pub function_times: Vec<FunctionTime>,
}

/// Response of the format endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatResponse {
    pub success: bool,
    pub formatted: Option<String>,
    pub error: Option<String>,
}

/// Either backend response, as read from a saved JSON body
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResponse {
    Run(RunResponse),
    Format(FormatResponse),
}

impl BackendResponse {
    /// Read a response body. Only the format endpoint sends `formatted`, so
    /// its presence picks the format shape; everything else reads as a run.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("formatted").is_some() {
            Ok(BackendResponse::Format(serde_json::from_value(value)?))
        } else {
            Ok(BackendResponse::Run(serde_json::from_value(value)?))
        }
    }
}

/// One line of the profiler pane
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub label: String,
    pub value: String,
}

impl ProfileRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }
}

impl RunResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Text for the output pane.
    ///
    /// A successful run shows compiler warnings (in `error`) above the program
    /// output. A failed run shows the error, falling back to the output.
    pub fn display_text(&self) -> String {
        if !self.success {
            return [self.error.as_str(), self.output.as_str()]
                .into_iter()
                .find(|text| !text.is_empty())
                .unwrap_or("An error occurred")
                .to_string();
        }

        let combined = match (self.error.is_empty(), self.output.is_empty()) {
            (false, false) => format!("{}\n{}", self.error, self.output),
            (false, true) => self.error.clone(),
            (true, false) => self.output.clone(),
            (true, true) => String::new(),
        };

        if combined.is_empty() && self.images.is_empty() {
            "(Program completed with no output)".to_string()
        } else {
            combined
        }
    }

    /// Rows for the profiler pane; empty when the backend sent no timings.
    pub fn profile_rows(&self) -> Vec<ProfileRow> {
        let mut rows = Vec::new();

        if let Some(ms) = self.compile_time_ms {
            rows.push(ProfileRow::new("Compile Time", format!("{:.2} s", ms as f64 / 1000.0)));
        }
        for function in &self.function_times {
            rows.push(ProfileRow::new(
                format!("{}()", function.name),
                format!("{:.3} ms", function.time_ms),
            ));
        }
        if let Some(ms) = self.run_time_ms {
            rows.push(ProfileRow::new("Execution Time", format!("{} ms", ms)));
        }

        rows
    }
}

impl FormatResponse {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The formatted source, or the message to show instead.
    pub fn into_result(self) -> Result<String, String> {
        match (self.success, self.formatted) {
            (true, Some(formatted)) => Ok(formatted),
            _ => Err(format!(
                "Format error: {}",
                self.error.unwrap_or_else(|| "Unknown error".to_string())
            )),
        }
    }
}
