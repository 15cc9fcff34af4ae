//! 세션 미들웨어 (Service 계층)
//!
//! 실제 요청마다 쿠키에서 세션 ID를 꺼내 Redis를 조회하고,
//! 성공 시 `SessionUser`를 요청 extension에 삽입합니다.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse},
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::rc::Rc;

use crate::config::SessionConfig;
use crate::domain::models::auth::SessionUser;
use crate::services::auth::SessionService;

use super::session_middleware::SessionPolicy;

pub struct SessionMiddlewareService<S> {
    pub(crate) service: Rc<S>,
    pub(crate) policy: SessionPolicy,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let policy = self.policy;

        Box::pin(async move {
            let session_user = resolve_session(&req).await;

            match (session_user, policy) {
                (Some(user), _) => {
                    req.extensions_mut().insert(user);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                (None, SessionPolicy::Optional) => {
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                (None, SessionPolicy::Required) => {
                    log::debug!("세션 없는 보호 라우트 접근: {} → /login", req.path());

                    let response = HttpResponse::Found()
                        .append_header(("Location", "/login"))
                        .finish()
                        .map_into_right_body();

                    Ok(req.into_response(response))
                }
            }
        })
    }
}

/// 쿠키의 세션 ID를 Redis에서 조회하여 사용자를 복원
///
/// 쿠키가 없거나, 세션이 만료되었거나, Redis 조회에 실패하면 `None`을
/// 반환합니다. 미들웨어 단계에서는 장애를 인증 실패로 다룹니다.
async fn resolve_session(req: &ServiceRequest) -> Option<SessionUser> {
    // 상위 스코프 미들웨어가 이미 복원했으면 재사용
    if let Some(existing) = req.extensions().get::<SessionUser>().cloned() {
        return Some(existing);
    }

    let cookie = req.cookie(&SessionConfig::cookie_name())?;
    let session_id = cookie.value().to_string();

    let session_service = req.app_data::<web::Data<SessionService>>()?;

    match session_service.load_session(&session_id).await {
        Ok(Some(user_id)) => Some(SessionUser {
            user_id,
            session_id,
        }),
        Ok(None) => None,
        Err(e) => {
            log::warn!("세션 조회 중 오류: {}", e);
            None
        }
    }
}
