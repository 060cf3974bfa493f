//! HTTP handlers and route configuration.

mod health;
mod index;
mod posts;
mod user;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index::widget_shell)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/{id}", web::delete().to(posts::delete_post))
            .route("/user", web::get().to(user::current_user)),
    );
}
