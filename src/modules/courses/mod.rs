// Courses module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::Course;
pub use repositories::CourseRepository;
pub use services::CourseService;
