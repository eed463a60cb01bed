use actix_web::http::header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use actix_web::{error, http::StatusCode, HttpResponse, HttpResponseBuilder};
use derive_more::{Display, Error};

/// Body of the response returned for a rejected API key.
pub const UNAUTHORIZED_MESSAGE: &str = "The API key provided is not authorized.";

/// Request-time rejection produced by the API key gate.
///
/// Rendered as a plain-text `401` with an explicit `Content-Length`. The body
/// never carries details about why the key was refused.
#[derive(Debug, Display, Error)]
pub enum AuthError {
    /// The key header was missing or empty, or the lookup found nothing.
    #[display("The API key provided is not authorized.")]
    Unauthorized,
}

impl error::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = self.to_string();
        HttpResponseBuilder::new(self.status_code())
            .insert_header((
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ))
            .insert_header((CONTENT_LENGTH, HeaderValue::from(body.len())))
            .body(body)
    }
}
