//! Audio file serving.

use std::io::ErrorKind;
use std::path::Path;

use actix_web::{HttpResponse, web};

use crate::state::AppState;

/// GET /music/{path} - send the file's bytes, typed by its extension.
pub async fn stream_file(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let file_path = state.library.resolve(&path.into_inner());

    match tokio::fs::read(&file_path).await {
        Ok(bytes) => HttpResponse::Ok()
            .content_type(content_type_for(&file_path))
            .body(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("File not found"),
        Err(e) => {
            tracing::error!(error = %e, path = %file_path.display(), "failed to read music file");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Failed to read file")
        }
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        _ => "application/octet-stream",
    }
}
