//! # Secrets Gateway
//!
//! 익명 비밀 공유 서비스를 위한 인증 게이트웨이입니다.
//!
//! ## 주요 기능
//!
//! - 로컬 사용자명/패스워드 가입 및 로그인 (bcrypt 해싱)
//! - Google / Facebook OAuth 2.0 소셜 로그인 (find-or-create)
//! - Redis 기반 서버 사이드 세션 (HttpOnly 쿠키)
//! - 인증된 사용자의 secret 제출 및 익명 목록 조회
//!
//! ## 아키텍처
//!
//! handlers → services → repositories → MongoDB/Redis 의 계층 구조이며,
//! 모든 의존성은 기동 시점에 명시적으로 조립되어 `web::Data`로 주입됩니다.

pub mod caching;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;
