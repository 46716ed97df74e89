use crate::modules::courses::models::Course;
use crate::store::DocumentRepository;

/// Repository for the `courses` collection
pub type CourseRepository = DocumentRepository<Course>;
