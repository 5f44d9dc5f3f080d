//! OAuth 권한 매핑
//!
//! 프로바이더 로그인으로 얻은 권한은 세 종류 중 하나입니다.
//!
//! | 변형 | 발생 조건 | 매핑 결과 |
//! |------|-----------|-----------|
//! | `Oidc` | 토큰 응답에 `id_token` 포함 | `ROLE_OIDC_USER` |
//! | `OAuth2` | `id_token` 없이 UserInfo만 존재 | `ROLE_OAUTH2_USER` |
//! | `Default` | 그 외 단순 권한 | 권한 이름 그대로 |

use std::collections::BTreeSet;

use serde_json::{Map, Value};

pub const OIDC_USER_AUTHORITY: &str = "ROLE_OIDC_USER";
pub const OAUTH2_USER_AUTHORITY: &str = "ROLE_OAUTH2_USER";

/// 프로바이더가 부여한 권한
#[derive(Debug, Clone, PartialEq)]
pub enum GrantedAuthority {
    /// OpenID Connect 로그인 (ID 토큰 + UserInfo 속성)
    Oidc {
        id_token: String,
        user_info: Map<String, Value>,
    },
    /// 일반 OAuth 2.0 로그인 (UserInfo 속성)
    OAuth2 { attributes: Map<String, Value> },
    /// 이름만 가진 단순 권한
    Default(String),
}

/// 권한 하나를 역할 문자열로 변환합니다.
pub fn map_authority(authority: &GrantedAuthority) -> String {
    match authority {
        GrantedAuthority::Oidc { .. } => OIDC_USER_AUTHORITY.to_string(),
        GrantedAuthority::OAuth2 { .. } => OAUTH2_USER_AUTHORITY.to_string(),
        GrantedAuthority::Default(name) => name.clone(),
    }
}

/// 여러 권한을 중복 없이 역할 문자열 집합으로 변환합니다.
pub fn map_authorities<'a>(
    authorities: impl IntoIterator<Item = &'a GrantedAuthority>,
) -> BTreeSet<String> {
    authorities
        .into_iter()
        .map(map_authority)
        .filter(|name| !name.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes() -> Map<String, Value> {
        match json!({ "id": "g-123", "email": "user@gmail.com" }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_map_each_variant() {
        let oidc = GrantedAuthority::Oidc {
            id_token: "header.payload.sig".to_string(),
            user_info: attributes(),
        };
        let oauth2 = GrantedAuthority::OAuth2 { attributes: attributes() };
        let plain = GrantedAuthority::Default("SCOPE_email".to_string());

        assert_eq!(map_authority(&oidc), "ROLE_OIDC_USER");
        assert_eq!(map_authority(&oauth2), "ROLE_OAUTH2_USER");
        assert_eq!(map_authority(&plain), "SCOPE_email");
    }

    #[test]
    fn test_map_authorities_dedupes() {
        let authorities = vec![
            GrantedAuthority::OAuth2 { attributes: attributes() },
            GrantedAuthority::OAuth2 { attributes: Map::new() },
            GrantedAuthority::Default("USER".to_string()),
            GrantedAuthority::Default("  ".to_string()),
        ];

        let mapped = map_authorities(&authorities);
        assert_eq!(mapped.len(), 2);
        assert!(mapped.contains("ROLE_OAUTH2_USER"));
        assert!(mapped.contains("USER"));
    }
}
