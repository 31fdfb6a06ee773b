//! Students repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::student::{CreateStudent, Student},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Sqlite>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get student by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, class_group FROM students WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student with id {} not found", id)))
    }

    /// Register a new student. Names are not required to be unique.
    pub async fn create(&self, student: &CreateStudent) -> AppResult<Student> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, class_group)
            VALUES (?1, ?2)
            RETURNING id, name, class_group
            "#,
        )
        .bind(&student.name)
        .bind(&student.class_group)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// List all students ordered by name
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, class_group FROM students ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }
}
