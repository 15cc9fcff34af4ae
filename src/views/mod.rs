//! 서버 렌더링 뷰 레지스트리
//!
//! HTML 템플릿을 바이너리에 내장하고 Handlebars 레지스트리에 등록합니다.
//! 런타임 파일 시스템 의존 없이 배포 단위 하나로 동작합니다.

use handlebars::Handlebars;

use crate::errors::errors::{AppError, AppResult};

/// 모든 뷰 템플릿을 레지스트리에 등록
pub fn register_views(registry: &mut Handlebars<'static>) -> AppResult<()> {
    let templates = [
        ("layout_head", include_str!("templates/layout_head.hbs")),
        ("layout_foot", include_str!("templates/layout_foot.hbs")),
        ("home", include_str!("templates/home.hbs")),
        ("register", include_str!("templates/register.hbs")),
        ("login", include_str!("templates/login.hbs")),
        ("submit", include_str!("templates/submit.hbs")),
        ("secrets", include_str!("templates/secrets.hbs")),
    ];

    for (name, source) in templates {
        registry
            .register_template_string(name, source)
            .map_err(|e| AppError::InternalError(format!("템플릿 등록 실패 ({}): {}", name, e)))?;
    }

    log::info!("✅ 뷰 템플릿 {}개 등록 완료", templates.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build_registry() -> Handlebars<'static> {
        let mut registry = Handlebars::new();
        register_views(&mut registry).unwrap();
        registry
    }

    #[test]
    fn test_all_templates_register() {
        let registry = build_registry();

        for name in ["home", "register", "login", "submit", "secrets"] {
            assert!(registry.has_template(name), "missing template: {}", name);
        }
    }

    #[test]
    fn test_secrets_template_renders_entries() {
        let registry = build_registry();

        let html = registry
            .render(
                "secrets",
                &json!({ "secrets": [{ "secret": "고양이를 더 좋아해요" }] }),
            )
            .unwrap();

        assert!(html.contains("고양이를 더 좋아해요"));
    }

    #[test]
    fn test_secrets_template_renders_empty_state() {
        let registry = build_registry();

        let html = registry
            .render("secrets", &json!({ "secrets": [] }))
            .unwrap();

        assert!(html.contains("아직 제출된 비밀이 없습니다"));
    }

    #[test]
    fn test_home_template_switches_on_authentication() {
        let registry = build_registry();

        let guest = registry.render("home", &json!({ "authenticated": false })).unwrap();
        assert!(guest.contains("/register"));

        let member = registry.render("home", &json!({ "authenticated": true })).unwrap();
        assert!(member.contains("/secrets"));
    }
}
