use axum::{extract::State, response::IntoResponse, Json};

use crate::services::activities_service;
use crate::store::ActivityDirectory;

pub async fn activities_handler(State(directory): State<ActivityDirectory>) -> impl IntoResponse {
    Json(activities_service::build_activities_listing(&directory))
}
