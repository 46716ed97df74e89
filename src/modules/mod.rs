pub mod courses;
pub mod health;
pub mod payments;
pub mod students;

use std::sync::Arc;

use actix_web::web;

use crate::middleware::error_handler::{json_error_handler, query_error_handler};
use crate::store::DocumentStore;

use courses::{CourseRepository, CourseService};
use payments::{PaymentRepository, PaymentService};
use students::{StudentRepository, StudentService};

/// Largest accepted JSON request body
const JSON_PAYLOAD_LIMIT: usize = 256 * 1024;

/// Every service the HTTP layer needs, built once and shared across workers
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<dyn DocumentStore>,
    pub students: Arc<StudentService>,
    pub courses: Arc<CourseService>,
    pub payments: Arc<PaymentService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            students: Arc::new(StudentService::new(
                StudentRepository::new(store.clone()),
                CourseRepository::new(store.clone()),
            )),
            courses: Arc::new(CourseService::new(CourseRepository::new(store.clone()))),
            payments: Arc::new(PaymentService::new(
                PaymentRepository::new(store.clone()),
                StudentRepository::new(store.clone()),
            )),
            store,
        }
    }

    /// Register shared state, extractor config and all module routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.store.clone()))
            .app_data(web::Data::new(self.students.clone()))
            .app_data(web::Data::new(self.courses.clone()))
            .app_data(web::Data::new(self.payments.clone()))
            .app_data(
                web::JsonConfig::default()
                    .limit(JSON_PAYLOAD_LIMIT)
                    .error_handler(json_error_handler),
            )
            .app_data(web::QueryConfig::default().error_handler(query_error_handler));

        health::configure(cfg);
        students::configure(cfg);
        courses::configure(cfg);
        payments::configure(cfg);
    }
}
