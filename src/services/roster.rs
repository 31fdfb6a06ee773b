//! Student roster service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::student::{CreateStudent, Student},
    repository::Repository,
};

#[derive(Clone)]
pub struct RosterService {
    repository: Repository,
}

impl RosterService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new student
    pub async fn add_student(&self, student: CreateStudent) -> AppResult<Student> {
        student
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.students.create(&student).await
    }

    /// List all students, sorted by name
    pub async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.repository.students.list().await
    }
}
