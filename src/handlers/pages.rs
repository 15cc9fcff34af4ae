//! 페이지 렌더링 핸들러
//!
//! 서버 렌더링 HTML 페이지를 반환하는 GET 핸들러들입니다.
//! `/submit`과 `/secrets`는 세션 미들웨어 뒤에 배치되어 인증이
//! 보장된 상태에서 호출됩니다.

use actix_web::{web, HttpResponse};
use handlebars::Handlebars;
use serde_json::json;

use crate::domain::models::auth::{OptionalSession, SessionUser};
use crate::errors::errors::{AppError, AppResult};
use crate::services::users::UserService;

/// 템플릿을 HTML 응답으로 렌더링
fn render(
    registry: &Handlebars<'static>,
    name: &str,
    data: &serde_json::Value,
) -> AppResult<HttpResponse> {
    let html = registry
        .render(name, data)
        .map_err(|e| AppError::InternalError(format!("템플릿 렌더링 실패 ({}): {}", name, e)))?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// GET / : 홈 페이지
pub async fn home_page(
    registry: web::Data<Handlebars<'static>>,
    session: OptionalSession,
) -> AppResult<HttpResponse> {
    render(
        &registry,
        "home",
        &json!({ "authenticated": session.is_authenticated() }),
    )
}

/// GET /register : 회원가입 폼
pub async fn register_page(registry: web::Data<Handlebars<'static>>) -> AppResult<HttpResponse> {
    render(&registry, "register", &json!({}))
}

/// GET /login : 로그인 폼
pub async fn login_page(registry: web::Data<Handlebars<'static>>) -> AppResult<HttpResponse> {
    render(&registry, "login", &json!({}))
}

/// GET /submit : secret 제출 폼 (인증 필수)
pub async fn submit_page(
    registry: web::Data<Handlebars<'static>>,
    _user: SessionUser,
) -> AppResult<HttpResponse> {
    render(&registry, "submit", &json!({}))
}

/// GET /secrets : 제출된 secret 목록 (인증 필수)
///
/// secret을 제출한 사용자들의 secret만 익명으로 나열합니다.
pub async fn secrets_page(
    registry: web::Data<Handlebars<'static>>,
    user_service: web::Data<UserService>,
    _user: SessionUser,
) -> AppResult<HttpResponse> {
    let secrets = user_service.list_secrets().await?;

    render(&registry, "secrets", &json!({ "secrets": secrets }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use crate::views::register_views;

    fn registry_data() -> web::Data<Handlebars<'static>> {
        let mut registry = Handlebars::new();
        register_views(&mut registry).unwrap();
        web::Data::new(registry)
    }

    #[actix_web::test]
    async fn test_home_page_renders_for_anonymous_visitor() {
        let app = test::init_service(
            App::new()
                .app_data(registry_data())
                .route("/", web::get().to(home_page)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let body = test::read_body(res).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/register"));
    }

    #[actix_web::test]
    async fn test_register_page_contains_oauth_links() {
        let app = test::init_service(
            App::new()
                .app_data(registry_data())
                .route("/register", web::get().to(register_page)),
        )
        .await;

        let req = test::TestRequest::get().uri("/register").to_request();
        let res = test::call_service(&app, req).await;

        let body = test::read_body(res).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/auth/google"));
        assert!(html.contains("/auth/facebook"));
    }

    #[actix_web::test]
    async fn test_login_page_posts_to_login() {
        let app = test::init_service(
            App::new()
                .app_data(registry_data())
                .route("/login", web::get().to(login_page)),
        )
        .await;

        let req = test::TestRequest::get().uri("/login").to_request();
        let res = test::call_service(&app, req).await;

        let body = test::read_body(res).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"action="/login""#));
    }
}
