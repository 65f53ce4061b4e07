//! The function's input event and output response.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FunctionError;

/// Which function an event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    FindCourse,
    FindCourseSource,
    CreateCourse,
}

impl FunctionKind {
    pub fn name(self) -> &'static str {
        match self {
            FunctionKind::FindCourse => "find-course",
            FunctionKind::FindCourseSource => "find-course-source",
            FunctionKind::CreateCourse => "create-course",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FunctionKind {
    type Err = FunctionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "find-course" => Ok(FunctionKind::FindCourse),
            "find-course-source" => Ok(FunctionKind::FindCourseSource),
            "create-course" => Ok(FunctionKind::CreateCourse),
            other => Err(FunctionError::UnknownFunction(other.to_string())),
        }
    }
}

/// Incoming event; `body` is the request DTO as a JSON string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl FunctionEvent {
    pub fn parse(input: &str) -> Result<Self, FunctionError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Proxy-style response written to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    pub fn new(status_code: u16, body: String) -> Self {
        let headers = BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]);
        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self::new(status_code, body),
            Err(error) => {
                tracing::error!(%error, "Failed to serialize response body");
                Self::new(500, "Internal Server Error".to_string())
            }
        }
    }
}
