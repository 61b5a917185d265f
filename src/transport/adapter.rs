//! Explicit HTTP adapter for shapes
//!
//! [`ShapeJson`] is both an extractor and a response. As an extractor it
//! buffers the body, parses JSON and runs [`Shape::decode`]; as a response it
//! serializes [`Shape::encode`]. Handlers never see serde-derived parsing.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::shapes::{DecodeError, Shape, ValidationError};

/// A shape travelling over HTTP as a JSON object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeJson<T>(pub T);

/// Why a request body was refused
#[derive(Debug, thiserror::Error)]
pub enum RejectionError {
    #[error("failed to read request body: {message}")]
    Body { status: StatusCode, message: String },

    #[error("request body is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("request body must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl RejectionError {
    /// Machine-readable kind, used in the error body
    pub fn kind(&self) -> &'static str {
        match self {
            RejectionError::Body { .. } => "body",
            RejectionError::MalformedJson(_) => "malformed_json",
            RejectionError::NotAnObject { .. } => "not_an_object",
            RejectionError::Validation(_) => "validation",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RejectionError::Body { status, .. } => *status,
            RejectionError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            RejectionError::NotAnObject { .. } | RejectionError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    /// JSON error body
    pub fn to_body(&self) -> Value {
        let mut error = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let RejectionError::Validation(e) = self {
            error["field"] = json!(e.field);
            error["reason"] = json!(e.reason.code());
        }
        json!({ "error": error })
    }
}

impl From<DecodeError> for RejectionError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::NotAnObject { found } => RejectionError::NotAnObject { found },
            DecodeError::Invalid(e) => RejectionError::Validation(e),
        }
    }
}

impl IntoResponse for RejectionError {
    fn into_response(self) -> Response {
        tracing::debug!(kind = self.kind(), error = %self, "Request body rejected");
        (self.status(), Json(self.to_body())).into_response()
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for ShapeJson<T>
where
    S: Send + Sync,
    T: Shape + Send,
{
    type Rejection = RejectionError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RejectionError::Body {
                status: e.status(),
                message: e.body_text(),
            })?;

        let value: Value = serde_json::from_slice(&bytes)?;
        let shape = T::decode_value(&value)?;

        tracing::trace!(shape = T::NAME, "Decoded request body");
        Ok(ShapeJson(shape))
    }
}

impl<T: Shape> IntoResponse for ShapeJson<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0.to_value())).into_response()
    }
}
