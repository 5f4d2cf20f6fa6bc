use std::any::Any;

use actix_web::{http::StatusCode, HttpResponse};

use mp_core::errors::DispatchError;

/// Map a dispatch failure to its HTTP status and compatibility body
pub fn error_response(error: &DispatchError) -> HttpResponse {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(error.to_response())
}

/// Text carried by a panic payload, if it is a string
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}
