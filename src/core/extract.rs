//! Extractor con rejection in formato `AppError`

use crate::core::AppError;
use axum_macros::FromRequestParts;

/// Come `axum::extract::Path`, ma un parametro non valido diventa un `{error}` JSON
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
