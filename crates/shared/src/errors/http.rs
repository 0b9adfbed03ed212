use crate::errors::{error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    extract::{
        multipart::MultipartError,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Internal(String),
    Status(StatusCode, String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => HttpError::BadRequest(msg),
            ServiceError::Repo(repo_err) => HttpError::Internal(repo_err.to_string()),
            ServiceError::Upload(upload_err) => HttpError::Internal(upload_err.to_string()),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::Status(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::Status(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for HttpError {
    fn from(err: MultipartError) -> Self {
        HttpError::Status(err.status(), err.body_text())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            HttpError::Status(status, msg) => (status, msg),
        };

        let body = Json(ErrorResponse { error: msg });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{RepositoryError, UploadError};

    #[test]
    fn validation_maps_to_bad_request() {
        let err = HttpError::from(ServiceError::Validation("No se envió ninguna imagen".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_and_upload_failures_keep_raw_message() {
        let repo = HttpError::from(ServiceError::Repo(RepositoryError::Sqlx(
            sqlx::Error::RowNotFound,
        )));
        match repo {
            HttpError::Internal(msg) => assert_eq!(msg, sqlx::Error::RowNotFound.to_string()),
            other => panic!("unexpected {other:?}"),
        }

        let upload = HttpError::from(ServiceError::Upload(UploadError::Rejected(
            "Invalid image file".into(),
        )));
        match upload {
            HttpError::Internal(msg) => assert_eq!(msg, "Invalid image file"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
