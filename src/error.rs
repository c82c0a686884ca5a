use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (code {code})")]
pub struct Error {
    pub code: i32,
    pub message: String,
}

const CONFIG_ERROR: i32 = 1;
const DIRECTORY_UNAVAILABLE_ERROR: i32 = 10;
const ROUTING_UNAVAILABLE_ERROR: i32 = 11;
const ROUTING_DECODE_FAILED_ERROR: i32 = 12;
const NO_ROUTE_FOUND_ERROR: i32 = 13;
const PRICING_ERROR: i32 = 14;
const SERVER_ERROR: i32 = 20;
const MALFORMED_REQUEST_ERROR: i32 = 101;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => {
                tracing::error!(code = self.code, error = %self.message, "quote request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            _ => {
                tracing::warn!(code = self.code, error = %self.message, "quote request rejected");
                (StatusCode::BAD_REQUEST, self.message.as_str())
            }
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl Error {
    pub fn is_config_error(&self) -> bool {
        self.code == CONFIG_ERROR
    }

    pub fn is_directory_unavailable_error(&self) -> bool {
        self.code == DIRECTORY_UNAVAILABLE_ERROR
    }

    pub fn is_routing_unavailable_error(&self) -> bool {
        self.code == ROUTING_UNAVAILABLE_ERROR
    }

    pub fn is_routing_decode_failed_error(&self) -> bool {
        self.code == ROUTING_DECODE_FAILED_ERROR
    }

    pub fn is_no_route_found_error(&self) -> bool {
        self.code == NO_ROUTE_FOUND_ERROR
    }

    pub fn is_pricing_error(&self) -> bool {
        self.code == PRICING_ERROR
    }

    pub fn is_malformed_request_error(&self) -> bool {
        self.code == MALFORMED_REQUEST_ERROR
    }
}

pub fn config_error<T: Debug>(err: T) -> Error {
    Error {
        code: CONFIG_ERROR,
        message: format!("configuration error: {:?}", err),
    }
}

pub fn directory_unavailable_error<T: Debug>(cause: T) -> Error {
    Error {
        code: DIRECTORY_UNAVAILABLE_ERROR,
        message: format!("driver directory unavailable: {:?}", cause),
    }
}

pub fn routing_unavailable_error<T: Debug>(cause: T) -> Error {
    Error {
        code: ROUTING_UNAVAILABLE_ERROR,
        message: format!("routing service unavailable: {:?}", cause),
    }
}

pub fn routing_decode_failed_error<T: Debug>(cause: T) -> Error {
    Error {
        code: ROUTING_DECODE_FAILED_ERROR,
        message: format!("routing response malformed: {:?}", cause),
    }
}

pub fn no_route_found_error() -> Error {
    Error {
        code: NO_ROUTE_FOUND_ERROR,
        message: "no route found".into(),
    }
}

pub fn pricing_error<T: Debug>(cause: T) -> Error {
    Error {
        code: PRICING_ERROR,
        message: format!("pricing failed: {:?}", cause),
    }
}

pub fn server_error<T: Debug>(cause: T) -> Error {
    Error {
        code: SERVER_ERROR,
        message: format!("server error: {:?}", cause),
    }
}

pub fn malformed_request_error<T: Debug>(cause: T) -> Error {
    Error {
        code: MALFORMED_REQUEST_ERROR,
        message: format!("malformed request: {:?}", cause),
    }
}
