//! The wire envelope and the (status, payload) reply type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// Uniform wrapper for failure responses. `errors` is omitted from the
/// router's bare Not Found body.
#[derive(Serialize)]
pub struct Envelope {
    #[serde(rename = "statusMessage")]
    pub status_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// What every action produces: a status code plus a JSON payload.
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    /// Read results: 202 with the raw record or array, no envelope.
    pub fn fetched<T: Serialize>(data: T) -> Reply {
        Reply {
            status: StatusCode::ACCEPTED,
            body: serde_json::to_value(data).unwrap_or(Value::Null),
        }
    }

    /// Mutation success: 200 with a bare status message.
    pub fn done(message: &str) -> Reply {
        Reply {
            status: StatusCode::OK,
            body: serde_json::json!({ "statusMessage": message }),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
