use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, ListQuery, Result};
use crate::modules::courses::models::Course;
use crate::modules::courses::repositories::CourseRepository;

/// Service for course business logic
pub struct CourseService {
    course_repo: CourseRepository,
}

impl CourseService {
    pub fn new(course_repo: CourseRepository) -> Self {
        Self { course_repo }
    }

    pub async fn list_courses(&self, query: ListQuery) -> Result<Vec<Course>> {
        query.validate()?;
        self.course_repo
            .list(Some(query.limit), Some(query.offset))
            .await
    }

    pub async fn get_course(&self, id: &str) -> Result<Course> {
        self.course_repo
            .find_by_id(id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Course {}", id)))
    }

    pub async fn create_course(&self, course: Course) -> Result<Course> {
        course.validate()?;

        let created = self.course_repo.create(course).await?;
        info!(
            course_id = created.id.as_deref().unwrap_or_default(),
            title = %created.title,
            "Course created"
        );

        Ok(created)
    }

    pub async fn update_course(&self, id: &str, course: Course) -> Result<Course> {
        course.validate()?;

        let updated = self.course_repo.update(id.to_string(), course).await?;
        info!(course_id = id, "Course updated");

        Ok(updated)
    }

    pub async fn delete_course(&self, id: &str) -> Result<()> {
        self.course_repo.delete(id.to_string()).await?;
        info!(course_id = id, "Course deleted");
        Ok(())
    }
}
