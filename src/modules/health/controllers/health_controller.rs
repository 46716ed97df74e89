use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::store::DocumentStore;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub database: String,
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub database: bool,
    pub application: bool,
}

/// GET / - Service banner
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "EduPortal Learning Management API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// GET /health - Liveness probe
/// Returns 200 if the application is alive (can respond to requests)
/// Does not check dependencies
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            database: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Returns 200 if the document store answers, 503 otherwise
pub async fn readiness_check(store: web::Data<Arc<dyn DocumentStore>>) -> impl Responder {
    let mut checks = ReadinessChecks {
        database: false,
        application: true,
    };

    match store.ping().await {
        Ok(()) => checks.database = true,
        Err(e) => tracing::error!("Database readiness check failed: {}", e),
    }

    let ready = checks.database && checks.application;
    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
