//! Playlist endpoint.

use actix_web::{HttpResponse, web};

use crate::state::AppState;

/// GET /api/playlist - sorted playable file names, rebuilt on every call.
pub async fn playlist(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.library.playlist().await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use tempfile::TempDir;

    use kiosk_infra::FsMusicLibrary;

    use crate::state::AppState;

    #[actix_web::test]
    async fn playlist_lists_audio_files_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["b.wav", "a.mp3", "c.txt"] {
            std::fs::write(tmp.path().join(name), b"data").unwrap();
        }
        let state = AppState {
            library: Arc::new(FsMusicLibrary::new(tmp.path())),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/playlist").to_request();
        let names: Vec<String> = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(names, ["a.mp3", "b.wav"]);
    }

    #[actix_web::test]
    async fn playlist_for_a_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let state = AppState {
            library: Arc::new(FsMusicLibrary::new(tmp.path().join("nowhere"))),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/playlist").to_request();
        let names: Vec<String> = test::read_body_json(test::call_service(&app, req).await).await;
        assert!(names.is_empty());
    }
}
