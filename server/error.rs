use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use subway_graph::SubwayError;

/// HTTP face of [`SubwayError`]
#[derive(Debug)]
pub struct ApiError(pub SubwayError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SubwayError> for ApiError {
    fn from(err: SubwayError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            SubwayError::Validation(_) => StatusCode::BAD_REQUEST,
            SubwayError::NotFound(_) => StatusCode::NOT_FOUND,
            SubwayError::DuplicateName(_) => StatusCode::CONFLICT,
            SubwayError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let SubwayError::Storage(message) = &self.0 {
            log::error!("{message}");
        }
        let message = self.0.to_string();
        HttpResponse::build(self.status_code()).json(ErrorBody { message: &message })
    }
}
