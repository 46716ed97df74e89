use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::ListQuery;
use crate::modules::payments::services::PaymentService;
use crate::modules::students::models::Student;
use crate::modules::students::services::StudentService;

/// List students
/// GET /students
pub async fn list_students(
    service: web::Data<Arc<StudentService>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let students = service.list_students(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(students))
}

/// Get student by ID
/// GET /students/{id}
pub async fn get_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let student = service.get_student(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(student))
}

/// Payment records of one student, with totals
/// GET /students/{id}/payments
pub async fn list_student_payments(
    students: web::Data<Arc<StudentService>>,
    payments: web::Data<Arc<PaymentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let student_id = path.into_inner();

    // 404 for unknown students rather than an empty list
    students.get_student(&student_id).await?;
    let records = payments.list_for_student(&student_id).await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Create a student
/// POST /students
pub async fn create_student(
    service: web::Data<Arc<StudentService>>,
    request: web::Json<Student>,
) -> Result<HttpResponse, AppError> {
    let student = service.create_student(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(student))
}

/// Replace a student
/// PUT /students/{id}
pub async fn update_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<String>,
    request: web::Json<Student>,
) -> Result<HttpResponse, AppError> {
    let student = service
        .update_student(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(student))
}

/// Delete a student
/// DELETE /students/{id}
pub async fn delete_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_student(&path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure student routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student))
            .route("/{id}/payments", web::get().to(list_student_payments)),
    );
}
