//! 세션 미들웨어 (Transform 계층)
//!
//! 요청의 세션 쿠키를 Redis에서 조회하여 인증 사용자를 복원합니다.
//! 두 가지 모드를 제공합니다:
//!
//! - `required()`: 보호된 라우트용. 세션이 없으면 `/login`으로 302 리다이렉트
//! - `optional()`: 공개 라우트용. 세션이 있으면 복원하고 없어도 통과

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use std::future::{ready, Ready};
use std::rc::Rc;

use super::session_inner::SessionMiddlewareService;

/// 세션 검사 모드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPolicy {
    /// 세션 필수. 없으면 /login 리다이렉트
    Required,
    /// 세션 선택. 있으면 복원만 수행
    Optional,
}

/// 세션 복원 미들웨어 팩토리
pub struct SessionMiddleware {
    policy: SessionPolicy,
}

impl SessionMiddleware {
    /// 인증이 필수인 라우트에 적용
    pub fn required() -> Self {
        Self {
            policy: SessionPolicy::Required,
        }
    }

    /// 인증이 선택적인 라우트에 적용
    pub fn optional() -> Self {
        Self {
            policy: SessionPolicy::Optional,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            policy: self.policy,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn protected_handler() -> HttpResponse {
        HttpResponse::Ok().body("protected")
    }

    #[actix_web::test]
    async fn test_required_redirects_anonymous_to_login() {
        let app = test::init_service(
            App::new().service(
                web::scope("")
                    .wrap(SessionMiddleware::required())
                    .route("/secrets", web::get().to(protected_handler)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/secrets").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers().get("Location").unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_optional_passes_anonymous_through() {
        let app = test::init_service(
            App::new().service(
                web::scope("")
                    .wrap(SessionMiddleware::optional())
                    .route("/", web::get().to(protected_handler)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
