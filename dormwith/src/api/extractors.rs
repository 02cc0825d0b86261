use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::DormError;

/// `Json` whose rejections come back in the v1 error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(DormError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for DormError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> DormError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                DormError::Validation(format!("Missing required field: {field}"))
            } else {
                DormError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            DormError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            DormError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            DormError::Internal("Failed to read request body".to_string())
        }
        _ => DormError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}
