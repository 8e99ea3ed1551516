//! Раздача собранной страницы: `/health` и статика из `dist` с fallback на `index.html`.

use crate::shared::format::request_log_line;
use axum::body::{to_bytes, Body};
use axum::http::header::CONTENT_LENGTH;
use axum::http::response::Parts;
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

pub fn build_router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(request_logger))
}

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = to_bytes(body, usize::MAX).await;
    let duration_ms = start.elapsed().as_millis();
    let time = chrono::Local::now().format("%H:%M:%S").to_string();

    match bytes {
        Ok(bytes) => {
            let status = parts.status.as_u16();
            let line = request_log_line(
                &time,
                duration_ms,
                Some(bytes.len()),
                status,
                method.as_str(),
                uri.path(),
            );
            if status == 200 {
                tracing::info!("{}", line);
            } else {
                tracing::warn!("{}", line);
            }
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            let response = unreadable_body_response(parts);
            let line = request_log_line(
                &time,
                duration_ms,
                None,
                response.status().as_u16(),
                method.as_str(),
                uri.path(),
            );
            tracing::error!("{} ({})", line, e);
            response
        }
    }
}

/// Тело ответа не прочитано: 500 с пустым телом, старый `Content-Length` снимается
fn unreadable_body_response(mut parts: Parts) -> Response {
    parts.status = StatusCode::INTERNAL_SERVER_ERROR;
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use std::path::PathBuf;
    use tower::ServiceExt;

    /// Временный каталог `dist`, удаляется при drop
    struct DistFixture {
        dir: PathBuf,
    }

    impl DistFixture {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "dog-guide-dist-{}-{}",
                std::process::id(),
                name
            ));
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("index.html"), "<title>All About Dogs</title>").unwrap();
            std::fs::write(dir.join("layout.css"), "body {}").unwrap();
            Self { dir }
        }

        fn router(&self) -> Router {
            build_router(&self.dir)
        }
    }

    impl Drop for DistFixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let fixture = DistFixture::new("health");
        let (status, body) = get_body(fixture.router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_serves_static_file() {
        let fixture = DistFixture::new("static");
        let (status, body) = get_body(fixture.router(), "/layout.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_to_index() {
        let fixture = DistFixture::new("fallback");
        let (status, body) = get_body(fixture.router(), "/breeds/poodle").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("All About Dogs"));
    }

    #[test]
    fn test_fixture_removed_on_drop() {
        let fixture = DistFixture::new("cleanup");
        let dir = fixture.dir.clone();
        assert!(dir.join("index.html").exists());
        drop(fixture);
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_unreadable_body_drops_content_length() {
        let (parts, _) = axum::http::Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_LENGTH, "42")
            .header(CONTENT_TYPE, "text/css")
            .body(())
            .unwrap()
            .into_parts();

        let response = unreadable_body_response(parts);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(CONTENT_LENGTH).is_none());
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/css");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
