//! Request extractors whose rejections render through [`AppError`].
//!
//! axum's stock `Json` and `Query` reject with 415/422 and a plain-text body;
//! these wrappers turn every malformed payload into a 400 with the JSON error
//! envelope.

use crate::error::AppError;
use axum::extract::{FromRequest, FromRequestParts};

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
