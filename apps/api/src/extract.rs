use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::errors::AppError;

/// `axum::Json` whose rejections render through [`AppError`] instead of axum's
/// plain-text 4xx, so a malformed body gets the usual error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}
