use crate::modules::students::models::Student;
use crate::store::DocumentRepository;

/// Repository for the `students` collection
pub type StudentRepository = DocumentRepository<Student>;
