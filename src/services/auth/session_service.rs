//! 세션 서비스
//!
//! 서버 사이드 세션의 생성/조회/파기를 담당합니다. 클라이언트에는
//! 불투명한 UUID 세션 ID만 HttpOnly 쿠키로 전달되고, 실제 인증 상태는
//! Redis에 TTL과 함께 저장됩니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use std::sync::Arc;
use uuid::Uuid;

use crate::caching::redis::RedisClient;
use crate::config::SessionConfig;
use crate::errors::errors::{AppError, AppResult};

/// Redis에 저장되는 세션 레코드
#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct SessionRecord {
    user_id: String,
}

/// 서버 사이드 세션 관리 서비스
pub struct SessionService {
    redis_client: Arc<RedisClient>,
}

impl SessionService {
    pub fn new(redis_client: Arc<RedisClient>) -> Self {
        Self { redis_client }
    }

    fn session_key(session_id: &str) -> String {
        format!("session:{}", session_id)
    }

    /// 새 세션 생성
    ///
    /// UUID v4 세션 ID를 발급하고 Redis에 사용자 ID를 TTL과 함께
    /// 저장합니다. 반환값은 쿠키에 넣을 세션 ID입니다.
    pub async fn create_session(&self, user_id: &str) -> AppResult<String> {
        let session_id = Uuid::new_v4().to_string();
        let record = SessionRecord {
            user_id: user_id.to_string(),
        };

        self.redis_client
            .set_with_expiry(&Self::session_key(&session_id), &record, SessionConfig::ttl_seconds())
            .await
            .map_err(|e| AppError::RedisError(format!("세션 저장 실패: {}", e)))?;

        log::debug!("세션 생성: user={}", user_id);
        Ok(session_id)
    }

    /// 세션 ID로 사용자 ID 조회
    ///
    /// 만료되었거나 존재하지 않는 세션은 `None`을 반환합니다.
    pub async fn load_session(&self, session_id: &str) -> AppResult<Option<String>> {
        let record = self
            .redis_client
            .get::<SessionRecord>(&Self::session_key(session_id))
            .await
            .map_err(|e| AppError::RedisError(format!("세션 조회 실패: {}", e)))?;

        Ok(record.map(|r| r.user_id))
    }

    /// 세션 파기 (로그아웃)
    pub async fn destroy_session(&self, session_id: &str) -> AppResult<()> {
        self.redis_client
            .del(&Self::session_key(session_id))
            .await
            .map_err(|e| AppError::RedisError(format!("세션 삭제 실패: {}", e)))?;

        log::debug!("세션 파기: {}", session_id);
        Ok(())
    }

    /// 세션 쿠키 생성
    ///
    /// HttpOnly + SameSite=Lax로 설정하여 스크립트 접근과 CSRF를
    /// 완화합니다.
    pub fn build_cookie(session_id: String) -> Cookie<'static> {
        Cookie::build(SessionConfig::cookie_name(), session_id)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(SessionConfig::ttl_seconds() as i64))
            .finish()
    }

    /// 만료된 세션 쿠키 (로그아웃 시 클라이언트 쿠키 제거)
    pub fn clear_cookie() -> Cookie<'static> {
        Cookie::build(SessionConfig::cookie_name(), "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_format() {
        assert_eq!(
            SessionService::session_key("abc-123"),
            "session:abc-123"
        );
    }

    #[test]
    fn test_build_cookie_is_http_only() {
        let cookie = SessionService::build_cookie("sid".to_string());

        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.value(), "sid");
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = SessionService::clear_cookie();

        assert_eq!(cookie.max_age(), Some(Duration::seconds(0)));
        assert_eq!(cookie.value(), "");
    }
}
