//! Success envelopes.
//!
//! Successful responses are wrapped as `{"status": "success", "data": ...}`;
//! informational responses without a payload use `{"status": "success", "message": ...}`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticeResponse {
    pub status: &'static str,
    pub message: String,
}

impl NoticeResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}
