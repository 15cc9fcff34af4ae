//! 인증 핸들러
//!
//! 로컬 가입/로그인, 로그아웃, Google/Facebook OAuth 플로우의
//! HTTP 엔드포인트입니다. 성공 경로는 모두 302 리다이렉트로 끝나고,
//! 실패는 `AppError`의 리다이렉트 규칙을 따릅니다.

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::SessionConfig;
use crate::domain::dto::{LoginForm, OAuthCallbackQuery, RegisterForm};
use crate::domain::entities::User;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::{FacebookAuthService, GoogleAuthService, SessionService};
use crate::services::users::UserService;

/// 로그인 성공 공통 처리: 세션 생성 후 /secrets로 리다이렉트
async fn establish_session(
    session_service: &SessionService,
    user: &User,
) -> AppResult<HttpResponse> {
    let user_id = user
        .id_string()
        .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

    let session_id = session_service.create_session(&user_id).await?;

    Ok(HttpResponse::Found()
        .append_header(("Location", "/secrets"))
        .cookie(SessionService::build_cookie(session_id))
        .finish())
}

/// POST /register : 로컬 회원가입
///
/// 가입 성공 시 즉시 로그인 상태가 됩니다.
pub async fn register(
    form: web::Form<RegisterForm>,
    user_service: web::Data<UserService>,
    session_service: web::Data<SessionService>,
) -> AppResult<HttpResponse> {
    let user = user_service.register(form.into_inner()).await?;
    establish_session(&session_service, &user).await
}

/// 로그인 폼 검증
///
/// 빈 필드는 자격 증명 불일치와 동일한 인증 실패로 처리하여
/// 검증 단계에서 별도의 정보가 노출되지 않도록 합니다.
fn validate_login_form(form: &LoginForm) -> AppResult<()> {
    form.validate().map_err(|_| {
        AppError::AuthenticationError("사용자명 또는 비밀번호가 올바르지 않습니다".to_string())
    })
}

/// POST /login : 로컬 로그인
pub async fn login(
    form: web::Form<LoginForm>,
    user_service: web::Data<UserService>,
    session_service: web::Data<SessionService>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    validate_login_form(&form)?;

    let user = user_service.verify_password(&form.username, &form.password).await?;
    establish_session(&session_service, &user).await
}

/// GET /logout : 세션 파기 후 홈으로
///
/// 세션 쿠키가 없어도 에러 없이 홈으로 리다이렉트합니다.
pub async fn logout(
    req: HttpRequest,
    session_service: web::Data<SessionService>,
) -> AppResult<HttpResponse> {
    if let Some(cookie) = req.cookie(&SessionConfig::cookie_name()) {
        session_service.destroy_session(cookie.value()).await?;
    }

    Ok(HttpResponse::Found()
        .append_header(("Location", "/"))
        .cookie(SessionService::clear_cookie())
        .finish())
}

/// GET /auth/google : Google 동의 화면으로 리다이렉트
pub async fn google_start(
    google_auth: web::Data<GoogleAuthService>,
) -> AppResult<HttpResponse> {
    let url = google_auth.build_authorization_url().await?;

    Ok(HttpResponse::Found()
        .append_header(("Location", url))
        .finish())
}

/// GET /auth/google/secrets : Google OAuth 콜백
pub async fn google_callback(
    query: web::Query<OAuthCallbackQuery>,
    google_auth: web::Data<GoogleAuthService>,
    session_service: web::Data<SessionService>,
) -> AppResult<HttpResponse> {
    let (code, state) = extract_callback_params(query.into_inner(), "Google")?;
    let user = google_auth.handle_callback(&code, &state).await?;
    establish_session(&session_service, &user).await
}

/// GET /auth/facebook : Facebook 로그인 다이얼로그로 리다이렉트
pub async fn facebook_start(
    facebook_auth: web::Data<FacebookAuthService>,
) -> AppResult<HttpResponse> {
    let url = facebook_auth.build_authorization_url().await?;

    Ok(HttpResponse::Found()
        .append_header(("Location", url))
        .finish())
}

/// GET /auth/facebook/secrets : Facebook OAuth 콜백
pub async fn facebook_callback(
    query: web::Query<OAuthCallbackQuery>,
    facebook_auth: web::Data<FacebookAuthService>,
    session_service: web::Data<SessionService>,
) -> AppResult<HttpResponse> {
    let (code, state) = extract_callback_params(query.into_inner(), "Facebook")?;
    let user = facebook_auth.handle_callback(&code, &state).await?;
    establish_session(&session_service, &user).await
}

/// 콜백 쿼리에서 code/state를 추출
///
/// 사용자가 동의를 거부하면 프로바이더가 code 대신 error 파라미터를
/// 보내므로 인증 실패로 처리합니다.
fn extract_callback_params(
    query: OAuthCallbackQuery,
    provider: &str,
) -> AppResult<(String, String)> {
    if let Some(error) = query.error {
        return Err(AppError::AuthenticationError(format!(
            "{} 인증 거부됨: {} ({})",
            provider,
            error,
            query.error_description.unwrap_or_default()
        )));
    }

    let code = query.code.ok_or_else(|| {
        AppError::AuthenticationError(format!("{} 콜백에 code가 없습니다", provider))
    })?;
    let state = query.state.ok_or_else(|| {
        AppError::AuthenticationError(format!("{} 콜백에 state가 없습니다", provider))
    })?;

    Ok((code, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_form_maps_to_authentication_error() {
        let form = LoginForm {
            username: String::new(),
            password: "pw".to_string(),
        };

        let result = validate_login_form(&form);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_validate_login_form_accepts_filled_fields() {
        let form = LoginForm {
            username: "alice".to_string(),
            password: "secret123".to_string(),
        };

        assert!(validate_login_form(&form).is_ok());
    }

    #[test]
    fn test_extract_callback_params_success() {
        let query = OAuthCallbackQuery {
            code: Some("4/abc".to_string()),
            state: Some("state-xyz".to_string()),
            error: None,
            error_description: None,
        };

        let (code, state) = extract_callback_params(query, "Google").unwrap();
        assert_eq!(code, "4/abc");
        assert_eq!(state, "state-xyz");
    }

    #[test]
    fn test_extract_callback_params_user_denied() {
        let query = OAuthCallbackQuery {
            code: None,
            state: Some("state-xyz".to_string()),
            error: Some("access_denied".to_string()),
            error_description: Some("User denied access".to_string()),
        };

        let result = extract_callback_params(query, "Facebook");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_callback_params_missing_state() {
        let query = OAuthCallbackQuery {
            code: Some("4/abc".to_string()),
            state: None,
            error: None,
            error_description: None,
        };

        assert!(extract_callback_params(query, "Google").is_err());
    }
}
