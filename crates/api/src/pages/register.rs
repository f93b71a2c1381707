use actix_web::{http::header, HttpResponse};

/// The register page has no content of its own, it sends the visitor
/// straight to the login page.
pub async fn register_controller() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/login"))
        .finish()
}
