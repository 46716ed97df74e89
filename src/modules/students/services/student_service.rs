use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, ListQuery, Result};
use crate::modules::courses::repositories::CourseRepository;
use crate::modules::students::models::Student;
use crate::modules::students::repositories::StudentRepository;

/// Service for student business logic
pub struct StudentService {
    student_repo: StudentRepository,
    course_repo: CourseRepository,
}

impl StudentService {
    pub fn new(student_repo: StudentRepository, course_repo: CourseRepository) -> Self {
        Self {
            student_repo,
            course_repo,
        }
    }

    pub async fn list_students(&self, query: ListQuery) -> Result<Vec<Student>> {
        query.validate()?;
        self.student_repo
            .list(Some(query.limit), Some(query.offset))
            .await
    }

    pub async fn get_student(&self, id: &str) -> Result<Student> {
        self.student_repo
            .find_by_id(id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Student {}", id)))
    }

    pub async fn create_student(&self, student: Student) -> Result<Student> {
        self.validate(&student).await?;

        let created = self.student_repo.create(student).await?;
        info!(
            student_id = created.id.as_deref().unwrap_or_default(),
            "Student created"
        );

        Ok(created)
    }

    pub async fn update_student(&self, id: &str, student: Student) -> Result<Student> {
        self.validate(&student).await?;

        let updated = self.student_repo.update(id.to_string(), student).await?;
        info!(student_id = id, "Student updated");

        Ok(updated)
    }

    pub async fn delete_student(&self, id: &str) -> Result<()> {
        self.student_repo.delete(id.to_string()).await?;
        info!(student_id = id, "Student deleted");
        Ok(())
    }

    /// Field rules plus the enrolled course must exist
    async fn validate(&self, student: &Student) -> Result<()> {
        student.validate()?;

        if let Some(course_id) = &student.course_id {
            if self
                .course_repo
                .find_by_id(course_id.clone())
                .await?
                .is_none()
            {
                return Err(AppError::validation(format!(
                    "Course {} does not exist",
                    course_id
                )));
            }
        }

        Ok(())
    }
}
