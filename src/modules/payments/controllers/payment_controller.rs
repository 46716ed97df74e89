use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::ListQuery;
use crate::modules::payments::models::PaymentRecord;
use crate::modules::payments::services::PaymentService;

/// List payment records with computed totals
/// GET /payments
pub async fn list_payments(
    service: web::Data<Arc<PaymentService>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let payments = service.list_payments(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(payments))
}

/// Totals across all payment records
/// GET /payments/summary
pub async fn get_summary(
    service: web::Data<Arc<PaymentService>>,
) -> Result<HttpResponse, AppError> {
    let summary = service.summarize().await?;

    Ok(HttpResponse::Ok().json(summary))
}

/// Get payment record by ID
/// GET /payments/{id}
pub async fn get_payment(
    service: web::Data<Arc<PaymentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let payment = service.get_payment(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(payment))
}

/// Component amounts of a payment record
/// GET /payments/{id}/breakdown
pub async fn get_breakdown(
    service: web::Data<Arc<PaymentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let breakdown = service.get_breakdown(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(breakdown))
}

/// Create a payment record
/// POST /payments
pub async fn create_payment(
    service: web::Data<Arc<PaymentService>>,
    request: web::Json<PaymentRecord>,
) -> Result<HttpResponse, AppError> {
    let payment = service.create_payment(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(payment))
}

/// Replace a payment record
/// PUT /payments/{id}
pub async fn update_payment(
    service: web::Data<Arc<PaymentService>>,
    path: web::Path<String>,
    request: web::Json<PaymentRecord>,
) -> Result<HttpResponse, AppError> {
    let payment = service
        .update_payment(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(payment))
}

/// Delete a payment record
/// DELETE /payments/{id}
pub async fn delete_payment(
    service: web::Data<Arc<PaymentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_payment(&path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .route("", web::get().to(list_payments))
            .route("", web::post().to(create_payment))
            // registered ahead of /{id} so "summary" is not taken as an id
            .route("/summary", web::get().to(get_summary))
            .route("/{id}", web::get().to(get_payment))
            .route("/{id}", web::put().to(update_payment))
            .route("/{id}", web::delete().to(delete_payment))
            .route("/{id}/breakdown", web::get().to(get_breakdown)),
    );
}
