// Students module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::Student;
pub use repositories::StudentRepository;
pub use services::StudentService;
