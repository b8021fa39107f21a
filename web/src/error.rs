use std::error::Error as StdError;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use endpoint::envelope;
use log::*;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// No endpoint is registered under the requested name.
    EndpointNotFound { name: String },
    /// Wrapping the captured output in the success envelope failed.
    Encoding(serde_json::Error),
}

impl Error {
    pub(crate) fn endpoint_not_found(name: &str) -> Self {
        Self::EndpointNotFound {
            name: name.to_owned(),
        }
    }
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::EndpointNotFound { name } => error_response(
                StatusCode::NOT_FOUND,
                "Not Found",
                &format!("no endpoint registered under /{name}"),
            ),
            Error::Encoding(e) => {
                error!("Error encoding response: {e}");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "error encoding response",
                )
            }
        }
    }
}

fn error_response(status: StatusCode, title: &str, detail: &str) -> Response {
    let body = envelope::encode_error(status.as_u16(), title, detail);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
