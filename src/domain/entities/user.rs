//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증과 OAuth 인증(Google, Facebook)을 모두 지원하는
//! 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 유일한 도메인 엔티티입니다.
/// 사용자는 {사용자명+패스워드, google_id, facebook_id} 중 정확히
/// 하나로 식별되며, 제출된 secret 하나를 가질 수 있습니다.
/// 애플리케이션은 사용자를 삭제하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (OAuth 프로필에서 제공된 경우)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 사용자명 (unique)
    pub username: String,
    /// 해시된 비밀번호 (OAuth 사용자의 경우 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Google 사용자 고유 ID (unique, sparse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// Facebook 사용자 고유 ID (unique, sparse)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// 제출된 secret (제출 시마다 덮어씀, 목록이 아님)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// 인증 프로바이더
    pub auth_provider: AuthProvider,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (사용자명/패스워드)
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email: None,
            username,
            password_hash: Some(password_hash),
            google_id: None,
            facebook_id: None,
            secret: None,
            auth_provider: AuthProvider::Local,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 Google 사용자 생성
    ///
    /// Google OAuth 프로필에서 find-or-create 경로로 처음 만들어지는
    /// 사용자입니다. 비밀번호는 저장되지 않습니다.
    pub fn new_google(google_id: String, username: String, email: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            password_hash: None,
            google_id: Some(google_id),
            facebook_id: None,
            secret: None,
            auth_provider: AuthProvider::Google,
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 Facebook 사용자 생성
    pub fn new_facebook(facebook_id: String, username: String, email: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            password_hash: None,
            google_id: None,
            facebook_id: Some(facebook_id),
            secret: None,
            auth_provider: AuthProvider::Facebook,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 로컬 인증 사용자인지 확인
    pub fn is_local_auth(&self) -> bool {
        matches!(self.auth_provider, AuthProvider::Local)
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_local_auth() && self.password_hash.is_some()
    }

    /// secret을 제출한 적이 있는 사용자인지 확인
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_user_has_password_and_no_provider_ids() {
        let user = User::new_local("alice".to_string(), "$2b$04$hash".to_string());

        assert!(user.can_authenticate_with_password());
        assert!(user.google_id.is_none());
        assert!(user.facebook_id.is_none());
        assert_eq!(user.auth_provider, AuthProvider::Local);
    }

    #[test]
    fn test_google_user_has_no_password() {
        let user = User::new_google(
            "1234567890".to_string(),
            "john_doe".to_string(),
            Some("john@gmail.com".to_string()),
        );

        assert!(!user.can_authenticate_with_password());
        assert_eq!(user.google_id.as_deref(), Some("1234567890"));
        assert_eq!(user.auth_provider, AuthProvider::Google);
    }

    #[test]
    fn test_facebook_user_provider_id() {
        let user = User::new_facebook("fb-42".to_string(), "jane_doe".to_string(), None);

        assert_eq!(user.facebook_id.as_deref(), Some("fb-42"));
        assert!(user.google_id.is_none());
        assert!(user.email.is_none());
    }

    #[test]
    fn test_new_user_never_has_secret() {
        let user = User::new_local("bob".to_string(), "hash".to_string());
        assert!(!user.has_secret());
    }
}
