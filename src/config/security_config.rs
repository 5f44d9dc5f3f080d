//! 요청 게이트 보안 설정
//!
//! 인증 없이 접근 가능한 공개 경로 목록, Google 로그인 활성화 여부,
//! 잘못된 토큰을 즉시 거절할지(strict) 여부를 하나의 구조체로 관리합니다.
//!
//! ## 경로 패턴 문법
//!
//! | 패턴 | 의미 |
//! |------|------|
//! | `/v1/auth/login` | 정확히 일치하는 경로 |
//! | `/v1/users/{id}` | 해당 위치의 임의 세그먼트 하나 |
//! | `/v1/users/{id:[0-9]+}` | 숫자로만 이루어진 세그먼트 하나 |
//! | `/v1/auth/google/**` | 접두 경로 이하 모든 경로 |

use std::env;

use crate::config::data_config::{env_flag, split_csv};

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Any,
    Numeric,
}

/// 공개 경로 매칭에 사용하는 경로 패턴
#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_wildcard: bool,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let mut parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();

        let trailing_wildcard = parts.last() == Some(&"**");
        if trailing_wildcard {
            parts.pop();
        }

        let segments = parts
            .into_iter()
            .map(|part| match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                Some(var) => match var.split_once(':') {
                    Some((_, "[0-9]+")) | Some((_, "\\d+")) => Segment::Numeric,
                    _ => Segment::Any,
                },
                None => Segment::Literal(part.to_string()),
            })
            .collect();

        Self {
            raw: pattern.to_string(),
            segments,
            trailing_wildcard,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 요청 경로가 패턴과 일치하는지 검사합니다. 끝의 `/`는 무시합니다.
    pub fn matches(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if self.trailing_wildcard {
            if parts.len() < self.segments.len() {
                return false;
            }
        } else if parts.len() != self.segments.len() {
            return false;
        }

        self.segments.iter().zip(parts.iter()).all(|(segment, part)| match segment {
            Segment::Literal(lit) => lit == part,
            Segment::Any => true,
            Segment::Numeric => part.chars().all(|c| c.is_ascii_digit()),
        })
    }
}

/// 요청 게이트 설정
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub public_paths: Vec<PathPattern>,
    pub oauth_enabled: bool,
    pub strict_filter_errors: bool,
}

impl SecurityConfig {
    pub const DEFAULT_PUBLIC_PATHS: [&'static str; 8] = [
        "/health",
        "/v1/auth/signup",
        "/v1/auth/login",
        "/v1/auth/refresh",
        "/v1/auth/google/login",
        "/v1/auth/google/redirect",
        "/v1/auth/google/failure",
        "/v1/users/{id:[0-9]+}",
    ];

    pub fn new(oauth_enabled: bool, strict_filter_errors: bool) -> Self {
        Self {
            public_paths: Self::DEFAULT_PUBLIC_PATHS
                .iter()
                .map(|p| PathPattern::parse(p))
                .collect(),
            oauth_enabled,
            strict_filter_errors,
        }
    }

    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// * `OAUTH_ENABLED` - Google 로그인 라우트 등록 여부 (기본값: true)
    /// * `STRICT_FILTER_ERRORS` - 잘못된 토큰 즉시 거절 여부 (기본값: false)
    /// * `SECURITY_PUBLIC_PATHS` - 기본 목록에 추가할 공개 경로 (쉼표 구분)
    pub fn from_env() -> Self {
        let mut config = Self::new(
            env_flag("OAUTH_ENABLED", true),
            env_flag("STRICT_FILTER_ERRORS", false),
        );

        if let Ok(extra) = env::var("SECURITY_PUBLIC_PATHS") {
            config.add_public_paths(split_csv(&extra).iter().map(String::as_str));
        }

        config
    }

    pub fn add_public_paths<'a>(&mut self, patterns: impl IntoIterator<Item = &'a str>) {
        self.public_paths
            .extend(patterns.into_iter().map(PathPattern::parse));
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p.matches(path))
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(true, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        let pattern = PathPattern::parse("/v1/auth/login");

        assert!(pattern.matches("/v1/auth/login"));
        assert!(pattern.matches("/v1/auth/login/"));
        assert!(!pattern.matches("/v1/auth/login/extra"));
        assert!(!pattern.matches("/v1/auth/signup"));
    }

    #[test]
    fn test_numeric_variable_pattern() {
        let pattern = PathPattern::parse("/v1/users/{id:[0-9]+}");

        assert!(pattern.matches("/v1/users/42"));
        assert!(!pattern.matches("/v1/users/me"));
        assert!(!pattern.matches("/v1/users/42/posts"));
    }

    #[test]
    fn test_any_variable_and_wildcard_patterns() {
        let any = PathPattern::parse("/v1/items/{slug}");
        assert!(any.matches("/v1/items/hello-world"));

        let wildcard = PathPattern::parse("/docs/**");
        assert!(wildcard.matches("/docs"));
        assert!(wildcard.matches("/docs/openapi/v1.json"));
        assert!(!wildcard.matches("/v1/docs"));
    }

    #[test]
    fn test_default_public_paths() {
        let config = SecurityConfig::default();

        assert!(config.is_public("/health"));
        assert!(config.is_public("/v1/auth/signup"));
        assert!(config.is_public("/v1/users/7"));
        assert!(!config.is_public("/v1/users/me"));
        assert!(!config.is_public("/v1/auth/google/success"));
    }

    #[test]
    fn test_additional_public_paths() {
        let mut config = SecurityConfig::new(false, true);
        config.add_public_paths(["/metrics", "/static/**"]);

        assert!(config.is_public("/metrics"));
        assert!(config.is_public("/static/css/app.css"));
        assert!(!config.oauth_enabled);
        assert!(config.strict_filter_errors);
    }
}
