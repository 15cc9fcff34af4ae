//! # Authentication Configuration Module
//!
//! OAuth 프로바이더와 세션 관리 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 사용자명/패스워드 기반 전통적인 인증
//! 2. **Google OAuth 2.0**: Google 계정을 통한 소셜 로그인
//! 3. **Facebook OAuth 2.0**: Facebook 계정을 통한 소셜 로그인
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://127.0.0.1:3000/auth/google/secrets"
//! ```
//!
//! ### Facebook OAuth 설정
//! ```bash
//! export FACEBOOK_CLIENT_ID="your-facebook-app-id"
//! export FACEBOOK_CLIENT_SECRET="your-facebook-app-secret"
//! export FACEBOOK_REDIRECT_URI="http://127.0.0.1:3000/auth/facebook/secrets"
//! ```
//!
//! ### 세션/OAuth 보안 설정
//! ```bash
//! export SESSION_COOKIE_NAME="sgw_session"
//! export SESSION_TTL_SECONDS="86400"
//! export OAUTH_STATE_SECRET="your-oauth-state-secret"
//! ```

use std::env;

/// Google OAuth 2.0 설정을 관리하는 구조체
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 관리합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google OAuth Client ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set")
    }

    /// Google OAuth Client Secret을 반환합니다.
    ///
    /// 서버 사이드에서만 사용되며, 토큰 교환 시 사용됩니다.
    ///
    /// # Panics
    ///
    /// `GOOGLE_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET must be set")
    }

    /// 인증 완료 후 돌아올 콜백 URI를 반환합니다.
    ///
    /// 콜백 경로는 `/auth/google/secrets`이며, Google Cloud Console에
    /// 등록된 redirect URI와 일치해야 합니다.
    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://127.0.0.1:3000/auth/google/secrets".to_string())
    }

    /// Google OAuth Authorization 엔드포인트
    pub fn auth_uri() -> String {
        "https://accounts.google.com/o/oauth2/auth".to_string()
    }

    /// Google OAuth Token 엔드포인트
    pub fn token_uri() -> String {
        "https://oauth2.googleapis.com/token".to_string()
    }

    /// Google UserInfo 엔드포인트
    pub fn userinfo_uri() -> String {
        "https://www.googleapis.com/oauth2/v2/userinfo".to_string()
    }
}

/// Facebook OAuth 2.0 설정을 관리하는 구조체
///
/// Facebook 개발자 콘솔에서 생성한 앱의 클라이언트 정보를 관리합니다.
/// Google 설정과 동일한 구조를 가지며 Graph API 엔드포인트를 사용합니다.
pub struct FacebookOAuthConfig;

impl FacebookOAuthConfig {
    /// Facebook App ID를 반환합니다.
    ///
    /// # Panics
    ///
    /// `FACEBOOK_CLIENT_ID` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_id() -> String {
        env::var("FACEBOOK_CLIENT_ID").expect("FACEBOOK_CLIENT_ID must be set")
    }

    /// Facebook App Secret을 반환합니다.
    ///
    /// # Panics
    ///
    /// `FACEBOOK_CLIENT_SECRET` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn client_secret() -> String {
        env::var("FACEBOOK_CLIENT_SECRET").expect("FACEBOOK_CLIENT_SECRET must be set")
    }

    /// 인증 완료 후 돌아올 콜백 URI를 반환합니다.
    pub fn redirect_uri() -> String {
        env::var("FACEBOOK_REDIRECT_URI")
            .unwrap_or_else(|_| "http://127.0.0.1:3000/auth/facebook/secrets".to_string())
    }

    /// Facebook OAuth Authorization 엔드포인트
    pub fn auth_uri() -> String {
        "https://www.facebook.com/v18.0/dialog/oauth".to_string()
    }

    /// Facebook OAuth Token 엔드포인트
    pub fn token_uri() -> String {
        "https://graph.facebook.com/v18.0/oauth/access_token".to_string()
    }

    /// Facebook Graph API 프로필 엔드포인트
    pub fn userinfo_uri() -> String {
        "https://graph.facebook.com/me".to_string()
    }
}

/// OAuth CSRF state 생성에 사용되는 보안 설정
pub struct OAuthStateConfig;

impl OAuthStateConfig {
    /// state 해싱에 사용할 시크릿을 반환합니다.
    ///
    /// 프로덕션에서는 반드시 `OAUTH_STATE_SECRET`을 설정해야 합니다.
    pub fn state_secret() -> String {
        env::var("OAUTH_STATE_SECRET")
            .unwrap_or_else(|_| "dev-only-state-secret".to_string())
    }

    /// state 레코드의 Redis TTL (초)
    ///
    /// 콜백은 이 시간 안에 돌아와야 하며, 이후에는 만료 처리됩니다.
    pub fn state_ttl_seconds() -> u64 {
        600
    }
}

/// 서버 사이드 세션 설정
///
/// 세션은 불투명한 식별자를 쿠키로 전달하고, 실제 인증 상태는
/// Redis에 TTL과 함께 저장됩니다.
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 쿠키 이름을 반환합니다.
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "sgw_session".to_string())
    }

    /// 세션 TTL(초)을 반환합니다. 기본값: 24시간
    pub fn ttl_seconds() -> u64 {
        env::var("SESSION_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400)
    }
}

/// 인증 프로바이더
///
/// 사용자가 어떤 방식으로 가입/로그인했는지를 나타냅니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 사용자명/패스워드 인증
    Local,
    /// Google OAuth 2.0 인증
    Google,
    /// Facebook OAuth 2.0 인증
    Facebook,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다.
    ///
    /// # 지원 값
    ///
    /// - `"local"` → `AuthProvider::Local`
    /// - `"google"` → `AuthProvider::Google`
    /// - `"facebook"` → `AuthProvider::Facebook`
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            other => Err(format!("지원하지 않는 인증 프로바이더: {}", other)),
        }
    }

    /// 프로바이더의 소문자 이름을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_from_str() {
        assert_eq!(AuthProvider::from_str("local").unwrap(), AuthProvider::Local);
        assert_eq!(
            AuthProvider::from_str("Google").unwrap(),
            AuthProvider::Google
        );
        assert_eq!(
            AuthProvider::from_str("FACEBOOK").unwrap(),
            AuthProvider::Facebook
        );
        assert!(AuthProvider::from_str("github").is_err());
    }

    #[test]
    fn test_auth_provider_as_str_round_trip() {
        for provider in [
            AuthProvider::Local,
            AuthProvider::Google,
            AuthProvider::Facebook,
        ] {
            assert_eq!(
                AuthProvider::from_str(provider.as_str()).unwrap(),
                provider
            );
        }
    }

    #[test]
    fn test_session_config_defaults() {
        if std::env::var("SESSION_COOKIE_NAME").is_err() {
            assert_eq!(SessionConfig::cookie_name(), "sgw_session");
        }
        if std::env::var("SESSION_TTL_SECONDS").is_err() {
            assert_eq!(SessionConfig::ttl_seconds(), 86400);
        }
    }

    #[test]
    fn test_oauth_endpoints_are_https() {
        assert!(GoogleOAuthConfig::auth_uri().starts_with("https://"));
        assert!(GoogleOAuthConfig::token_uri().starts_with("https://"));
        assert!(FacebookOAuthConfig::auth_uri().starts_with("https://"));
        assert!(FacebookOAuthConfig::token_uri().starts_with("https://"));
    }
}
