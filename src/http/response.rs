//! Response construction.
//!
//! # Design Decisions
//! - Success bodies are XML with an explicit UTF-8 charset
//! - Every failure maps to the same plain-text 500; details go to the log only

use std::any::Any;

use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
    response::IntoResponse,
};

use crate::listings::FeedError;

pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// An XML document response.
#[derive(Debug, Clone)]
pub struct Xml(pub String);

impl IntoResponse for Xml {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE))],
            self.0,
        )
            .into_response()
    }
}

/// The generic 500 response.
pub fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE))],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}

impl IntoResponse for FeedError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Failed to serve feed");
        internal_error()
    }
}

/// Panic hook for `CatchPanicLayer`: log the payload, answer with the generic 500.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(panic = %message, "Handler panicked");
    internal_error()
}
