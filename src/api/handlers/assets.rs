// src/api/handlers/assets.rs
use std::borrow::Cow;

use actix_web::{HttpRequest, HttpResponse, Responder};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

/// Embedded-asset catch-all. The pages own their paths through the route
/// table; anything landing here is an asset lookup.
pub async fn static_file_handler(req: HttpRequest) -> impl Responder {
    let path = req.path().trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}
