//! JSON body extractor whose rejections use the [`AppError`] envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] on request bodies.
///
/// Syntax errors, type mismatches and a missing `Content-Type` are reported
/// as 400 `BAD_REQUEST` instead of axum's plain-text 415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
