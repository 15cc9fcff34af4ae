//! 세션에서 복원된 인증 사용자 모델
//!
//! 세션 미들웨어가 쿠키의 세션 ID를 Redis에서 조회한 뒤
//! 요청 extension에 삽입하는 구조체입니다. 핸들러는 extractor로
//! 이 값을 꺼내 현재 로그인된 사용자를 확인합니다.

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::errors::errors::AppError;

/// 현재 요청의 인증된 사용자
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// MongoDB 사용자 ID (hex 문자열)
    pub user_id: String,
    /// Redis에 저장된 세션 ID
    pub session_id: String,
}

impl FromRequest for SessionUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<SessionUser>()
            .cloned()
            .ok_or_else(|| AppError::AuthenticationError("로그인이 필요합니다".to_string()));

        ready(result)
    }
}

/// 로그인 여부만 확인하는 선택적 세션
///
/// 인증이 필수가 아닌 페이지(홈, 로그인 폼 등)에서 사용합니다.
/// 미들웨어가 세션을 복원하지 못해도 요청은 계속 진행됩니다.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionUser>);

impl OptionalSession {
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for OptionalSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<SessionUser>().cloned();
        ready(Ok(OptionalSession(user)))
    }
}
