//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 요청 필드 공백 정리
//! - [`display_terminal`] - 서버 기동 과정 터미널 출력

pub mod display_terminal;
pub mod string_utils;
