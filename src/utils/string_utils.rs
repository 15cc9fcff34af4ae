//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
/// OAuth 프로필에서 받은 선택적 이메일 필드를 정리할 때 사용됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  a@b.com  ".to_string())), Some("a@b.com".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// OAuth 프로필 이름을 사용자명 후보로 정규화합니다.
///
/// 소문자로 변환하고 공백을 언더스코어로 바꿉니다. 결과가 빈 문자열이면
/// 프로바이더 이름 기반의 대체 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::normalize_username;
///
/// assert_eq!(normalize_username("John Doe", "google"), "john_doe");
/// assert_eq!(normalize_username("   ", "facebook"), "facebook_user");
/// ```
pub fn normalize_username(base: &str, provider: &str) -> String {
    let normalized = base.trim().to_lowercase().replace(' ', "_");
    if normalized.is_empty() {
        format!("{}_user", provider)
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(
            clean_optional_string(Some("  Hello  ".to_string())),
            Some("Hello".to_string())
        );
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_normalize_username_lowercases_and_replaces_spaces() {
        assert_eq!(normalize_username("John Doe", "google"), "john_doe");
        assert_eq!(normalize_username("Alice", "facebook"), "alice");
    }

    #[test]
    fn test_normalize_username_empty_falls_back_to_provider() {
        assert_eq!(normalize_username("", "google"), "google_user");
        assert_eq!(normalize_username("   ", "facebook"), "facebook_user");
    }

    #[test]
    fn test_normalize_username_keeps_unicode() {
        assert_eq!(normalize_username("김철수", "google"), "김철수");
    }
}
