//! secret 제출 핸들러

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::domain::dto::SecretForm;
use crate::domain::models::auth::SessionUser;
use crate::errors::errors::{AppError, AppResult};
use crate::services::users::UserService;

/// 제출 폼 검증 (1~500자)
fn validate_secret_form(form: &SecretForm) -> AppResult<()> {
    form.validate()
        .map_err(|e| AppError::ValidationError(format!("입력값 검증 실패: {}", e)))
}

/// POST /submit : 현재 사용자의 secret 저장 (인증 필수)
///
/// 기존 secret이 있으면 덮어쓰고 /secrets로 리다이렉트합니다.
pub async fn submit_secret(
    form: web::Form<SecretForm>,
    user: SessionUser,
    user_service: web::Data<UserService>,
) -> AppResult<HttpResponse> {
    validate_secret_form(&form)?;

    user_service
        .submit_secret(&user.user_id, &form.secret)
        .await?;

    Ok(HttpResponse::Found()
        .append_header(("Location", "/secrets"))
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_secret_form_rejects_over_limit() {
        let form = SecretForm {
            secret: "비".repeat(501),
        };

        let result = validate_secret_form(&form);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_validate_secret_form_rejects_empty() {
        let form = SecretForm {
            secret: String::new(),
        };

        assert!(validate_secret_form(&form).is_err());
    }

    #[test]
    fn test_validate_secret_form_accepts_normal_secret() {
        let form = SecretForm {
            secret: "고양이를 더 좋아해요".to_string(),
        };

        assert!(validate_secret_form(&form).is_ok());
    }
}
