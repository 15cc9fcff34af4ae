//! Request / Response DTO Definitions
//!
//! HTML 폼과 OAuth 콜백에서 들어오는 요청 데이터 구조체를 정의합니다.
//! validator 크레이트로 입력 검증을 수행합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 폼 데이터 (POST /register)
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    /// 사용자명 (3~30자)
    #[validate(length(min = 3, max = 30, message = "사용자명은 3자 이상 30자 이하여야 합니다"))]
    pub username: String,

    /// 비밀번호 (6자 이상)
    #[validate(length(min = 6, max = 128, message = "비밀번호는 6자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 폼 데이터 (POST /login)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// secret 제출 폼 데이터 (POST /submit)
#[derive(Debug, Deserialize, Validate)]
pub struct SecretForm {
    #[validate(length(min = 1, max = 500, message = "secret은 1자 이상 500자 이하여야 합니다"))]
    pub secret: String,
}

/// OAuth 콜백 쿼리 파라미터
///
/// 프로바이더가 authorization code와 함께 리다이렉트할 때 전달하는
/// 파라미터입니다. 사용자가 동의를 거부하면 code 대신 error가 옵니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// secrets 목록 페이지에 렌더링되는 항목
#[derive(Debug, Clone, Serialize)]
pub struct SecretEntry {
    pub secret: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_rejects_short_username() {
        let form = RegisterForm {
            username: "ab".to_string(),
            password: "secret123".to_string(),
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn test_register_form_rejects_short_password() {
        let form = RegisterForm {
            username: "alice".to_string(),
            password: "12345".to_string(),
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn test_register_form_accepts_valid_input() {
        let form = RegisterForm {
            username: "alice".to_string(),
            password: "secret123".to_string(),
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_login_form_rejects_empty_fields() {
        let form = LoginForm {
            username: "".to_string(),
            password: "pw".to_string(),
        };

        assert!(form.validate().is_err());
    }

    #[test]
    fn test_secret_form_rejects_empty_secret() {
        let form = SecretForm {
            secret: "".to_string(),
        };

        assert!(form.validate().is_err());
    }
}
