use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};
use rocket::{Route, State};

use calculator_client::{EvaluateRequest, EvaluateResponse};
use telemetry::Measure;

use crate::config::ApiConfig;
use crate::error::ApiError;

lazy_static! {
    static ref EVALUATE_MEASURE: Measure = Measure::new("controller", "evaluate");
}

#[get("/status")]
fn status() -> Value {
    json!({ "status": "ok" })
}

#[get("/metrics")]
fn metrics() -> Result<String, Status> {
    telemetry::encode().map_err(|_| Status::InternalServerError)
}

#[post("/api/v1/evaluate", format = "json", data = "<request>")]
fn evaluate(
    request: Json<EvaluateRequest>,
    config: &State<ApiConfig>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    EVALUATE_MEASURE.record(|| {
        if request.expr.len() > config.max_expression_length {
            return Err(ApiError::ExpressionTooLong(config.max_expression_length));
        }

        let value = evaluator::evaluate(&request.expr)?;
        let display = evaluator::format_significant(value, config.precision);
        // JSON has no representation for inf or NaN
        if !value.is_finite() {
            return Err(ApiError::NotFinite(display));
        }

        Ok(Json(EvaluateResponse { value, display }))
    })
}

pub fn routes() -> Vec<Route> {
    routes![status, metrics, evaluate]
}
