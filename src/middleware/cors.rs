use actix_cors::Cors;
use actix_web::http::header;

/// CORS policy for the browser front-end
///
/// With an explicit origin only that origin may call the API; without one
/// any origin is accepted, which suits local development.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .allowed_header("x-request-id")
            .expose_headers(vec!["x-request-id"])
            .max_age(3600),
        None => Cors::permissive(),
    }
}
