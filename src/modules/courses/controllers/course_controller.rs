use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::core::ListQuery;
use crate::modules::courses::models::Course;
use crate::modules::courses::services::CourseService;

/// List courses
/// GET /courses
pub async fn list_courses(
    service: web::Data<Arc<CourseService>>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let courses = service.list_courses(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(courses))
}

/// Get course by ID
/// GET /courses/{id}
pub async fn get_course(
    service: web::Data<Arc<CourseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = service.get_course(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(course))
}

/// Create a course
/// POST /courses
pub async fn create_course(
    service: web::Data<Arc<CourseService>>,
    request: web::Json<Course>,
) -> Result<HttpResponse, AppError> {
    let course = service.create_course(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(course))
}

/// Replace a course
/// PUT /courses/{id}
pub async fn update_course(
    service: web::Data<Arc<CourseService>>,
    path: web::Path<String>,
    request: web::Json<Course>,
) -> Result<HttpResponse, AppError> {
    let course = service
        .update_course(&path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(course))
}

/// Delete a course
/// DELETE /courses/{id}
pub async fn delete_course(
    service: web::Data<Arc<CourseService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_course(&path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure course routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course)),
    );
}
