pub mod student;

pub use student::Student;
