// src/api/handlers/pages.rs
use actix_web::{HttpResponse, Result, http::header::ContentType, web};

use crate::api::AppState;
use crate::views;

pub async fn home() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::home::render()))
}

pub async fn experiment_page() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::experiment::render()))
}

/// Renders and consumes the pending result. Reload or direct navigation
/// finds the slot empty and gets the fallback view.
pub async fn result_page(state: web::Data<AppState>) -> Result<HttpResponse> {
    let body = match state.take_result().await {
        Some(result) => views::result::render(&result),
        None => views::result::render_fallback(),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
