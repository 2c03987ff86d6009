use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Recipe not found")]
    NotFound,

    #[error("A recipe with that title already exists")]
    DuplicateSlug,

    #[error("Malformed form submission: missing {0}")]
    MalformedForm(&'static str),

    #[error("No image file in form submission")]
    MissingUpload,

    #[error("Upload error: {0}")]
    Upload(#[from] MultipartError),

    #[error("Upload write error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] mongodb::error::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

impl AppError {
    /// Single classification point for the whole HTTP surface. New routes
    /// inherit this mapping by returning `Result<_, AppError>`.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MalformedForm(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateSlug
            | AppError::MissingUpload
            | AppError::Upload(_)
            | AppError::Io(_)
            | AppError::Storage(_)
            | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side detail stays in the log; clients get plain text.
        if status.is_server_error() {
            error!("{self}");
            (status, "Internal server error").into_response()
        } else {
            warn!("{self}");
            (status, self.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_recipe_is_not_found() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_field_is_bad_request() {
        assert_eq!(
            AppError::MalformedForm("title").status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn persistence_failures_are_server_errors() {
        assert_eq!(
            AppError::DuplicateSlug.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::MissingUpload.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let io = AppError::Io(std::io::Error::other("disk full"));
        assert_eq!(io.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
