//! OAuth 프로바이더 응답 모델
//!
//! Google / Facebook의 토큰 엔드포인트와 프로필 엔드포인트가
//! 반환하는 JSON 응답을 역직렬화하는 구조체들입니다.

use serde::Deserialize;

/// authorization code 교환으로 받은 액세스 토큰 응답
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// Google userinfo 엔드포인트 프로필 응답
#[derive(Debug, Deserialize)]
pub struct GoogleProfile {
    /// Google 계정 고유 ID
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
}

/// Facebook /me 엔드포인트 프로필 응답
#[derive(Debug, Deserialize)]
pub struct FacebookProfile {
    /// Facebook 계정 고유 ID
    pub id: String,
    /// 표시 이름
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_profile_deserializes_without_email() {
        let json = r#"{"id": "1234567890", "name": "John Doe"}"#;
        let profile: GoogleProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.id, "1234567890");
        assert!(profile.email.is_none());
    }

    #[test]
    fn test_token_response_ignores_unknown_fields() {
        let json = r#"{"access_token": "ya29.abc", "token_type": "Bearer", "scope": "profile"}"#;
        let token: OAuthTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "ya29.abc");
        assert!(token.expires_in.is_none());
    }

    #[test]
    fn test_facebook_profile_requires_id_and_name() {
        let json = r#"{"id": "fb-42", "name": "Jane Doe"}"#;
        let profile: FacebookProfile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.id, "fb-42");
        assert_eq!(profile.name, "Jane Doe");
    }
}
