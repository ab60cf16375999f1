//! Response status vocabulary shared with the browser client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall outcome of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    Warning,
    Error,
}

/// Specific outcome of an API call. Each code belongs to exactly one [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Ok,
    InvalidUrl,
    InvalidRequest,
    UnknownError,
}

impl StatusCode {
    pub fn status(self) -> Status {
        match self {
            StatusCode::Ok => Status::Ok,
            StatusCode::InvalidUrl | StatusCode::InvalidRequest => Status::Warning,
            StatusCode::UnknownError => Status::Error,
        }
    }

    /// Message the client shows the user; `None` when there is nothing to report.
    pub fn message(self) -> Option<&'static str> {
        match self {
            StatusCode::Ok => None,
            StatusCode::InvalidUrl => Some("The URL you entered is not a valid URL"),
            StatusCode::InvalidRequest => {
                Some("We are having difficulty communicating with the server")
            }
            StatusCode::UnknownError => Some("Unknown server error"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::InvalidUrl => "INVALID_URL",
            StatusCode::InvalidRequest => "INVALID_REQUEST",
            StatusCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status envelope carried by every API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: Status,
    pub status_code: StatusCode,
}

impl StatusReply {
    pub fn from_code(status_code: StatusCode) -> Self {
        Self {
            status: status_code.status(),
            status_code,
        }
    }

    pub fn ok() -> Self {
        Self::from_code(StatusCode::Ok)
    }
}
