//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 게이트웨이를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 이 게이트웨이는 서버 렌더링 폼 기반이므로, 모든 에러는 JSON 응답이 아니라
//! 로그 기록 후 안전한 페이지로의 302 리다이렉트로 변환됩니다.
//! 중복 가입이나 입력 검증 실패는 `/register`로, 그 외의 모든 에러는
//! `/login`으로 이동합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn register(form: RegisterForm) -> Result<User, AppError> {
//!     if user_repo.find_by_username(&form.username).await?.is_some() {
//!         return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 게이트웨이에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 핸들러에서 반환되면 자동으로 안전한 페이지로의 리다이렉트로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 세션 저장소 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (가입 폼 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (중복 가입)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (로그인 실패, 세션 만료)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (OAuth 프로바이더 통신 실패)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이 에러가 리다이렉트될 안전한 페이지 경로
    ///
    /// 가입 과정에서 발생하는 에러는 `/register`로, 나머지는 모두
    /// `/login`으로 되돌립니다. 에러 내용 자체는 클라이언트에 노출하지
    /// 않습니다.
    pub fn redirect_target(&self) -> &'static str {
        match self {
            AppError::ConflictError(_) | AppError::ValidationError(_) => "/register",
            _ => "/login",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::FOUND
    }

    /// 에러를 로그에 남기고 안전한 페이지로 리다이렉트합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let target = self.redirect_target();
        log::warn!("요청 처리 실패: {} → {}로 리다이렉트", self, target);

        actix_web::HttpResponse::Found()
            .append_header(("Location", target))
            .finish()
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_conflict_error_redirects_to_register() {
        let error = AppError::ConflictError("duplicate username".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(response.headers().get("Location").unwrap(), "/register");
    }

    #[test]
    fn test_validation_error_redirects_to_register() {
        let error = AppError::ValidationError("username too short".to_string());
        let response = error.error_response();

        assert_eq!(response.headers().get("Location").unwrap(), "/register");
    }

    #[test]
    fn test_authentication_error_redirects_to_login() {
        let error = AppError::AuthenticationError("bad credentials".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(response.headers().get("Location").unwrap(), "/login");
    }

    #[test]
    fn test_database_error_redirects_to_login() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.headers().get("Location").unwrap(), "/login");
    }

    #[test]
    fn test_external_service_error_redirects_to_login() {
        let error = AppError::ExternalServiceError("google token exchange failed".to_string());
        let response = error.error_response();

        assert_eq!(response.headers().get("Location").unwrap(), "/login");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
