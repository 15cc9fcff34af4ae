//! Facebook OAuth 2.0 인증 서비스
//!
//! Google과 동일한 authorization code 플로우를 Facebook Graph API로
//! 구현합니다. 사용자명은 Facebook 표시 이름에서 만듭니다.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::caching::redis::RedisClient;
use crate::config::{FacebookOAuthConfig, OAuthStateConfig};
use crate::domain::entities::User;
use crate::domain::models::oauth::{FacebookProfile, OAuthTokenResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::services::auth::google_auth_service::generate_unique_username;
use crate::utils::string_utils::clean_optional_string;

/// Facebook OAuth 인증 서비스
pub struct FacebookAuthService {
    user_repo: Arc<UserRepository>,
    redis_client: Arc<RedisClient>,
    http_client: reqwest::Client,
}

impl FacebookAuthService {
    pub fn new(user_repo: Arc<UserRepository>, redis_client: Arc<RedisClient>) -> Self {
        Self {
            user_repo,
            redis_client,
            http_client: reqwest::Client::new(),
        }
    }

    fn state_key(state: &str) -> String {
        format!("oauth:state:facebook:{}", state)
    }

    fn generate_state() -> String {
        let nonce = Uuid::new_v4().to_string();
        let mut hasher = Sha256::new();
        hasher.update(nonce.as_bytes());
        hasher.update(OAuthStateConfig::state_secret().as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }

    /// Facebook 로그인 다이얼로그 URL 생성
    pub async fn build_authorization_url(&self) -> AppResult<String> {
        let state = Self::generate_state();

        self.redis_client
            .set_with_expiry(&Self::state_key(&state), &true, OAuthStateConfig::state_ttl_seconds())
            .await
            .map_err(|e| AppError::RedisError(format!("OAuth state 저장 실패: {}", e)))?;

        let url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}",
            FacebookOAuthConfig::auth_uri(),
            urlencoding::encode(&FacebookOAuthConfig::client_id()),
            urlencoding::encode(&FacebookOAuthConfig::redirect_uri()),
            urlencoding::encode("public_profile,email"),
            urlencoding::encode(&state),
        );

        Ok(url)
    }

    /// 콜백으로 돌아온 state 검증 (일회용 소비)
    pub async fn consume_state(&self, state: &str) -> AppResult<()> {
        let key = Self::state_key(state);

        let found = self
            .redis_client
            .get::<bool>(&key)
            .await
            .map_err(|e| AppError::RedisError(format!("OAuth state 조회 실패: {}", e)))?;

        if found.is_none() {
            return Err(AppError::AuthenticationError(
                "OAuth state가 유효하지 않거나 만료되었습니다".to_string(),
            ));
        }

        self.redis_client
            .del(&key)
            .await
            .map_err(|e| AppError::RedisError(format!("OAuth state 삭제 실패: {}", e)))?;

        Ok(())
    }

    /// authorization code를 액세스 토큰으로 교환
    pub async fn exchange_code_for_token(&self, code: &str) -> AppResult<OAuthTokenResponse> {
        let params = [
            ("code", code.to_string()),
            ("client_id", FacebookOAuthConfig::client_id()),
            ("client_secret", FacebookOAuthConfig::client_secret()),
            ("redirect_uri", FacebookOAuthConfig::redirect_uri()),
        ];

        let response = self
            .http_client
            .get(FacebookOAuthConfig::token_uri())
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Facebook 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Facebook 토큰 교환 거절됨 ({}): {}",
                status, body
            )));
        }

        response
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Facebook 토큰 응답 파싱 실패: {}", e))
            })
    }

    /// 액세스 토큰으로 Facebook 프로필 조회
    pub async fn fetch_profile(&self, access_token: &str) -> AppResult<FacebookProfile> {
        let response = self
            .http_client
            .get(FacebookOAuthConfig::userinfo_uri())
            .query(&[("fields", "id,name,email"), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Facebook 프로필 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Facebook 프로필 조회 거절됨: {}",
                response.status()
            )));
        }

        response
            .json::<FacebookProfile>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Facebook 프로필 파싱 실패: {}", e)))
    }

    /// Facebook 프로필로 사용자 find-or-create
    pub async fn find_or_create_user(&self, profile: FacebookProfile) -> AppResult<User> {
        if let Some(existing) = self.user_repo.find_by_facebook_id(&profile.id).await? {
            log::info!("기존 Facebook 사용자 로그인: {}", existing.username);
            return Ok(existing);
        }

        let email = clean_optional_string(profile.email);
        let username = generate_unique_username(&self.user_repo, &profile.name, "facebook").await?;
        let user = self
            .user_repo
            .create(User::new_facebook(profile.id, username, email))
            .await?;

        log::info!("✅ 새 Facebook 사용자 생성: {}", user.username);
        Ok(user)
    }

    /// 콜백 전체 플로우: state 검증 → 토큰 교환 → 프로필 조회 → 사용자 확보
    pub async fn handle_callback(&self, code: &str, state: &str) -> AppResult<User> {
        self.consume_state(state).await?;
        let token = self.exchange_code_for_token(code).await?;
        let profile = self.fetch_profile(&token.access_token).await?;
        self.find_or_create_user(profile).await
    }
}
