//! EduPortal Learning Management API Library
//!
//! CRUD-style HTTP API over students, courses and payment records, kept in a
//! document store. Payment responses carry each student's total obligation
//! as computed by [`modules::payments::PaymentAggregator`].

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod store;

// Re-export commonly used types
pub use modules::courses;
pub use modules::payments;
pub use modules::students;
pub use modules::AppServices;
