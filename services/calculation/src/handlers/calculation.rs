use crate::calculator;
use crate::error::AppError;
use crate::extract::{ApiJson, ApiQuery};
use axum::Json;
use calc_types::prelude::{BinaryOperationRequest, OperationResult, RangeRequest};

pub async fn add(
    ApiJson(payload): ApiJson<BinaryOperationRequest>,
) -> Json<OperationResult<i32>> {
    Json(calculator::add(payload.value1, payload.value2).into())
}

pub async fn subtract(
    ApiJson(payload): ApiJson<BinaryOperationRequest>,
) -> Json<OperationResult<i32>> {
    Json(calculator::subtract(payload.value1, payload.value2).into())
}

pub async fn multiply(
    ApiJson(payload): ApiJson<BinaryOperationRequest>,
) -> Json<OperationResult<i32>> {
    Json(calculator::multiply(payload.value1, payload.value2).into())
}

pub async fn divide(
    ApiJson(payload): ApiJson<BinaryOperationRequest>,
) -> Result<Json<OperationResult<f64>>, AppError> {
    let quotient = calculator::divide(payload.value1, payload.value2)?;
    Ok(Json(quotient.into()))
}

/// `GET /calculation/randomvalue?min=&max=`
pub async fn random_value(
    ApiQuery(range): ApiQuery<RangeRequest>,
) -> Result<Json<OperationResult<i32>>, AppError> {
    let value = calculator::random_in_range(range.min, range.max)?;
    Ok(Json(value.into()))
}

/// `POST /calculation/randomvalueinrange`
pub async fn random_value_in_range(
    ApiJson(range): ApiJson<RangeRequest>,
) -> Result<Json<OperationResult<i32>>, AppError> {
    let value = calculator::random_in_range(range.min, range.max)?;
    Ok(Json(value.into()))
}
