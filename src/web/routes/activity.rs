use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::services::signup_service;
use crate::store::{ActivityDirectory, DirectoryError};

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    pub email: Option<String>,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
    State(directory): State<ActivityDirectory>,
) -> Response {
    let Some(email) = require_email(&params) else {
        return detail_response(StatusCode::BAD_REQUEST, "Missing email");
    };

    match signup_service::create_signup(&directory, &activity_name, email) {
        Ok(message) => message_response(&message),
        Err(e) => {
            warn!("Signup failed for {}: {}", activity_name, e);
            detail_response(error_status(e), &e.to_string())
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
    State(directory): State<ActivityDirectory>,
) -> Response {
    let Some(email) = require_email(&params) else {
        return detail_response(StatusCode::BAD_REQUEST, "Missing email");
    };

    match signup_service::remove_signup(&directory, &activity_name, email) {
        Ok(message) => message_response(&message),
        Err(e) => {
            warn!("Unregister failed for {}: {}", activity_name, e);
            detail_response(error_status(e), &e.to_string())
        }
    }
}

fn require_email(params: &SignupParams) -> Option<&str> {
    params
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
}

fn error_status(err: DirectoryError) -> StatusCode {
    match err {
        DirectoryError::UnknownActivity | DirectoryError::NotRegistered => StatusCode::NOT_FOUND,
        DirectoryError::AlreadyRegistered => StatusCode::BAD_REQUEST,
    }
}

fn message_response(message: &str) -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}

fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}
