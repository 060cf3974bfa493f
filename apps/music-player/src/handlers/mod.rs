//! HTTP handlers and route configuration.

mod files;
mod health;
mod index;
mod playlist;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index::widget_shell))
        .route("/music/{path:.*}", web::get().to(files::stream_file))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/playlist", web::get().to(playlist::playlist)),
        );
}
