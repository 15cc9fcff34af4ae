//! Google OAuth 2.0 인증 서비스
//!
//! authorization code 플로우를 구현합니다:
//! 1. CSRF state를 발급하여 Redis에 일회용으로 저장하고 동의 화면 URL 생성
//! 2. 콜백에서 state 검증 후 code를 액세스 토큰으로 교환
//! 3. 토큰으로 프로필을 조회하고 find-or-create로 사용자 확보

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::caching::redis::RedisClient;
use crate::config::{GoogleOAuthConfig, OAuthStateConfig};
use crate::domain::entities::User;
use crate::domain::models::oauth::{GoogleProfile, OAuthTokenResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::{clean_optional_string, normalize_username};

/// Google OAuth 인증 서비스
pub struct GoogleAuthService {
    user_repo: Arc<UserRepository>,
    redis_client: Arc<RedisClient>,
    http_client: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(user_repo: Arc<UserRepository>, redis_client: Arc<RedisClient>) -> Self {
        Self {
            user_repo,
            redis_client,
            http_client: reqwest::Client::new(),
        }
    }

    fn state_key(state: &str) -> String {
        format!("oauth:state:google:{}", state)
    }

    /// CSRF 방지용 state 값 생성
    ///
    /// UUID nonce와 서버 시크릿을 함께 해싱하므로 외부에서 유효한
    /// state를 위조할 수 없습니다.
    fn generate_state() -> String {
        let nonce = Uuid::new_v4().to_string();
        let mut hasher = Sha256::new();
        hasher.update(nonce.as_bytes());
        hasher.update(OAuthStateConfig::state_secret().as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }

    /// Google 동의 화면으로 보낼 authorization URL 생성
    ///
    /// 생성된 state는 Redis에 TTL과 함께 저장되며, 콜백에서 일회성으로
    /// 소비됩니다.
    pub async fn build_authorization_url(&self) -> AppResult<String> {
        let state = Self::generate_state();

        self.redis_client
            .set_with_expiry(&Self::state_key(&state), &true, OAuthStateConfig::state_ttl_seconds())
            .await
            .map_err(|e| AppError::RedisError(format!("OAuth state 저장 실패: {}", e)))?;

        let url = format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}&state={}",
            GoogleOAuthConfig::auth_uri(),
            urlencoding::encode(&GoogleOAuthConfig::client_id()),
            urlencoding::encode(&GoogleOAuthConfig::redirect_uri()),
            urlencoding::encode("profile email"),
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

        // 재사용 방지를 위해 즉시 삭제
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
            ("client_id", GoogleOAuthConfig::client_id()),
            ("client_secret", GoogleOAuthConfig::client_secret()),
            ("redirect_uri", GoogleOAuthConfig::redirect_uri()),
            ("grant_type", "authorization_code".to_string()),
        ];

        let response = self
            .http_client
            .post(GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 거절됨 ({}): {}",
                status, body
            )));
        }

        response
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// 액세스 토큰으로 Google 프로필 조회
    pub async fn fetch_profile(&self, access_token: &str) -> AppResult<GoogleProfile> {
        let response = self
            .http_client
            .get(GoogleOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 프로필 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Google 프로필 조회 거절됨: {}",
                response.status()
            )));
        }

        response
            .json::<GoogleProfile>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 프로필 파싱 실패: {}", e)))
    }

    /// Google 프로필로 사용자 find-or-create
    ///
    /// 동일한 google_id로는 정확히 하나의 사용자만 존재합니다.
    /// 처음 보는 프로필이면 이메일 로컬 파트를 기반으로 사용자명을
    /// 생성해 새 사용자를 만듭니다.
    pub async fn find_or_create_user(&self, profile: GoogleProfile) -> AppResult<User> {
        if let Some(existing) = self.user_repo.find_by_google_id(&profile.id).await? {
            log::info!("기존 Google 사용자 로그인: {}", existing.username);
            return Ok(existing);
        }

        let email = clean_optional_string(profile.email);

        let base = email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .or(profile.given_name.as_deref())
            .or(profile.name.as_deref())
            .unwrap_or("google_user")
            .to_string();

        let username = generate_unique_username(&self.user_repo, &base, "google").await?;
        let user = self
            .user_repo
            .create(User::new_google(profile.id, username, email))
            .await?;

        log::info!("✅ 새 Google 사용자 생성: {}", user.username);
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

/// 사용자명 충돌 시 숫자 접미사를 붙여 고유한 사용자명 생성
pub(crate) async fn generate_unique_username(
    user_repo: &UserRepository,
    base: &str,
    provider: &str,
) -> AppResult<String> {
    let normalized = normalize_username(base, provider);

    if user_repo.find_by_username(&normalized).await?.is_none() {
        return Ok(normalized);
    }

    for suffix in 2..100 {
        let candidate = format!("{}{}", normalized, suffix);
        if user_repo.find_by_username(&candidate).await?.is_none() {
            return Ok(candidate);
        }
    }

    // 충돌이 비정상적으로 많으면 UUID 조각으로 확정
    Ok(format!(
        "{}_{}",
        normalized,
        &Uuid::new_v4().simple().to_string()[..8]
    ))
}
