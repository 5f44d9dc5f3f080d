//! 문자열 정리 유틸리티
//!
//! 요청 DTO에서 공백뿐인 선택 필드를 "값 없음"으로 다루기 위한 함수들입니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거하고, 비어 있으면 `None`을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  tester  ".to_string())), Some("tester".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// `#[serde(deserialize_with)]`용 선택 문자열 역직렬화
///
/// `""`, `"   "`, `null`은 모두 `None`이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Profile {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        username: Option<String>,
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  tester  ".to_string())), Some("tester".to_string()));
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        let cases = [
            (r#"{"username": "  tester "}"#, Some("tester")),
            (r#"{"username": "   "}"#, None),
            (r#"{"username": null}"#, None),
            (r#"{}"#, None),
        ];

        for (json, expected) in cases {
            let profile: Profile = serde_json::from_str(json).unwrap();
            assert_eq!(profile.username.as_deref(), expected, "{}", json);
        }
    }
}
