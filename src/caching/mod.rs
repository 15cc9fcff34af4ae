//! 캐싱 및 세션 저장소 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시와 세션/OAuth state 저장소를 제공합니다.
//!
//! # 주요 기능
//!
//! - Redis 통합 및 멀티플렉싱 연결
//! - JSON 기반 자동 직렬화/역직렬화
//! - TTL 지원 (세션 만료, OAuth state 일회성 보장)
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
