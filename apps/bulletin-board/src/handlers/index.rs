//! Widget shell.

use actix_web::HttpResponse;

const SHELL: &str = include_str!("../../assets/index.html");

/// GET / - serve the bulletin board widget shell.
pub async fn widget_shell() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(SHELL)
}
