use log::debug;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{response, Request};

use calculator_client::ErrorResponse;
use evaluator::EvalError;
use telemetry::IsErr;

#[derive(Debug)]
pub enum ApiError {
    InvalidExpression(String),
    ExpressionTooLong(usize),
    NotFinite(String),
}

impl From<EvalError> for ApiError {
    fn from(e: EvalError) -> Self {
        ApiError::InvalidExpression(e.to_string())
    }
}

impl IsErr for ApiError {
    fn is_err(&self) -> bool {
        // Every variant is caused by the submitted expression
        false
    }
}

impl<'r> response::Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let (message, status) = match self {
            ApiError::InvalidExpression(e) => {
                debug!("Rejected expression: {}", e);
                (e, Status::BadRequest)
            }
            ApiError::ExpressionTooLong(limit) => (
                format!("Expression too long, the limit is {} bytes", limit),
                Status::BadRequest,
            ),
            ApiError::NotFinite(display) => (
                format!("Result is not a finite number: {}", display),
                Status::BadRequest,
            ),
        };
        response::status::Custom(status, Json(ErrorResponse { message })).respond_to(req)
    }
}
