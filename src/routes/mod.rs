//! 라우트 구성
//!
//! 모든 HTTP 라우트를 한곳에서 등록합니다. 공개 라우트는 선택적 세션
//! 복원만 수행하고, `/submit`과 `/secrets`는 세션 필수 미들웨어 뒤에
//! 배치됩니다.

use actix_web::{web, HttpResponse};

use crate::handlers::{auth, pages, secrets};
use crate::middlewares::SessionMiddleware;

/// 전체 라우트 등록
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));

    // 공개 라우트: 로그인 여부만 복원
    cfg.service(
        web::scope("")
            .wrap(SessionMiddleware::optional())
            .route("/", web::get().to(pages::home_page))
            .route("/register", web::get().to(pages::register_page))
            .route("/register", web::post().to(auth::register))
            .route("/login", web::get().to(pages::login_page))
            .route("/login", web::post().to(auth::login))
            .route("/logout", web::get().to(auth::logout))
            .route("/auth/google", web::get().to(auth::google_start))
            .route("/auth/google/secrets", web::get().to(auth::google_callback))
            .route("/auth/facebook", web::get().to(auth::facebook_start))
            .route(
                "/auth/facebook/secrets",
                web::get().to(auth::facebook_callback),
            )
            // 보호 라우트: 세션 없으면 /login으로 리다이렉트
            .service(
                web::scope("")
                    .wrap(SessionMiddleware::required())
                    .route("/secrets", web::get().to(pages::secrets_page))
                    .route("/submit", web::get().to(pages::submit_page))
                    .route("/submit", web::post().to(secrets::submit_secret)),
            ),
    );
}

/// GET /health : 상태 확인 엔드포인트
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "secrets_gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
