//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Envelope wrapped around every response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Body of `POST /todos`. A missing `task` is treated like an empty one.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub task: String,
}

/// Body of `PUT /todos/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub complete: bool,
}

/// Payload of the health endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub total: usize,
}
