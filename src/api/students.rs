//! Student (roster) endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::student::{CreateStudent, Student},
};

/// List all students sorted by name
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "All registered students", body = Vec<Student>)
    )
)]
pub async fn list_students(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.roster.list_students().await?;
    Ok(Json(students))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student registered", body = Student),
        (status = 400, description = "Missing name")
    )
)]
pub async fn create_student(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let student = state.services.roster.add_student(request).await?;
    Ok((StatusCode::CREATED, Json(student)))
}
