//! 사용자 서비스
//!
//! 회원가입, 로컬 로그인 검증, secret 제출/조회 등 사용자 도메인의
//! 비즈니스 로직을 담당합니다.

use std::sync::Arc;
use std::time::Instant;
use validator::Validate;

use crate::config::PasswordConfig;
use crate::domain::dto::{RegisterForm, SecretEntry};
use crate::domain::entities::User;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::UserRepository;

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 로컬 회원가입
    ///
    /// 사용자명 중복을 검사하고 비밀번호를 bcrypt로 해시한 뒤 새 사용자를
    /// 생성합니다. 평문 비밀번호는 절대 저장되지 않습니다.
    pub async fn register(&self, form: RegisterForm) -> AppResult<User> {
        form.validate()
            .map_err(|e| AppError::ValidationError(format!("입력값 검증 실패: {}", e)))?;

        if self.user_repo.find_by_username(&form.username).await?.is_some() {
            return Err(AppError::ConflictError(format!(
                "이미 사용 중인 사용자명입니다: {}",
                form.username
            )));
        }

        let cost = PasswordConfig::bcrypt_cost();
        let start = Instant::now();
        let password_hash = bcrypt::hash(&form.password, cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("비밀번호 해싱 완료 (cost={}, {:?})", cost, start.elapsed());

        let user = self
            .user_repo
            .create(User::new_local(form.username, password_hash))
            .await?;

        log::info!("✅ 새 사용자 가입: {}", user.username);
        Ok(user)
    }

    /// 로컬 로그인 검증
    ///
    /// 사용자명 미존재와 비밀번호 불일치를 동일한 에러로 처리하여
    /// 계정 존재 여부가 노출되지 않도록 합니다.
    pub async fn verify_password(&self, username: &str, password: &str) -> AppResult<User> {
        let failure =
            || AppError::AuthenticationError("사용자명 또는 비밀번호가 올바르지 않습니다".to_string());

        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(failure)?;

        let hash = user.password_hash.as_deref().ok_or_else(failure)?;

        let matches = bcrypt::verify(password, hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !matches {
            return Err(failure());
        }

        Ok(user)
    }

    /// 현재 사용자의 secret 저장
    ///
    /// 기존 secret이 있으면 덮어씁니다. 사용자당 secret은 하나입니다.
    pub async fn submit_secret(&self, user_id: &str, secret: &str) -> AppResult<()> {
        let trimmed = secret.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "secret 내용이 비어 있습니다".to_string(),
            ));
        }

        self.user_repo.set_secret(user_id, trimmed).await?;
        log::info!("secret 제출 완료: user={}", user_id);
        Ok(())
    }

    /// 제출된 모든 secret 목록
    ///
    /// secret을 제출하지 않은 사용자는 결과에 포함되지 않으며,
    /// 제출자 정보는 노출되지 않습니다.
    pub async fn list_secrets(&self) -> AppResult<Vec<SecretEntry>> {
        let users = self.user_repo.find_with_secret().await?;

        Ok(users
            .into_iter()
            .filter_map(|u| u.secret)
            .map(|secret| SecretEntry { secret })
            .collect())
    }

    /// ID로 사용자 조회
    pub async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        self.user_repo.find_by_id(user_id).await
    }
}
