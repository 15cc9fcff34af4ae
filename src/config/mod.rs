//! # Configuration Module
//!
//! 인증 게이트웨이의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - OAuth 프로바이더, 세션 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 패닉
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, SessionConfig, GoogleOAuthConfig};
//!
//! let env = Environment::current();
//! let bind = ServerConfig::bind_address();
//! let ttl = SessionConfig::ttl_seconds();
//! let client_id = GoogleOAuthConfig::client_id();
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::{
    AuthProvider, FacebookOAuthConfig, GoogleOAuthConfig, OAuthStateConfig, SessionConfig,
};
pub use data_config::{Environment, PasswordConfig, ServerConfig};
