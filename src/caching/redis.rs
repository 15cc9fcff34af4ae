//! # Redis 클라이언트 구현
//!
//! 이 모듈은 Redis를 백엔드로 하는 저장소 클라이언트를 제공합니다.
//! 세션 레코드, OAuth state, 사용자 조회 캐시가 모두 이 클라이언트를
//! 통해 저장됩니다.
//!
//! ## 설계 철학
//!
//! - **타입 안전성**: Rust의 타입 시스템을 활용한 컴파일 타임 검증
//! - **비동기 우선**: 모든 작업이 async/await 기반으로 구현
//! - **자동 직렬화**: Serde를 통한 투명한 JSON 변환
//!
//! ## 연결 관리
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 효율적으로 처리합니다.

use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::env;

/// Redis 저장소 클라이언트 래퍼
///
/// Redis 서버와의 상호작용을 추상화합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::new().await?;
///
/// // 세션 저장 (24시간 TTL)
/// redis.set_with_expiry("session:abc", &user_id, 86400).await?;
///
/// // 세션 조회
/// let user_id: Option<String> = redis.get("session:abc").await?;
///
/// // 세션 파기
/// redis.del("session:abc").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱을 지원하는 Redis 클라이언트 인스턴스
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// 환경 변수 `REDIS_URL`에서 Redis 서버 주소를 읽어오며,
    /// 설정되지 않은 경우 기본값 `redis://localhost:6379`를 사용합니다.
    ///
    /// 생성 시 PING 명령으로 연결 테스트를 수행하여 Redis 서버의
    /// 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        // 연결 테스트
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 지정된 키에서 값을 조회합니다.
    ///
    /// JSON 으로 직렬화된 데이터를 자동으로 역직렬화하여 반환합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(Some(T))` - 키가 존재하고 역직렬화 성공
    /// - `Ok(None)` - 키가 존재하지 않음
    /// - `Err(RedisError)` - Redis 오류 또는 역직렬화 실패
    pub async fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json).map_err(|e| {
                    redis::RedisError::from((
                        redis::ErrorKind::TypeError,
                        "Deserialization failed",
                        e.to_string(),
                    ))
                })?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// 만료 시간과 함께 값을 저장합니다.
    ///
    /// 세션 레코드와 OAuth state처럼 수명이 정해진 데이터를 저장할 때
    /// 사용합니다. 기존 키가 있으면 덮어씁니다.
    ///
    /// ## 인자
    ///
    /// - `key` - 저장할 Redis 키
    /// - `value` - 저장할 값
    /// - `seconds` - 만료 시간 (초 단위)
    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization failed",
                e.to_string(),
            ))
        })?;
        conn.set_ex(key, json, seconds).await
    }

    /// 지정된 키를 삭제합니다.
    ///
    /// 로그아웃 시 세션 파기, 캐시 무효화, OAuth state의 일회성 보장에
    /// 사용됩니다. 키가 없어도 성공으로 처리합니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }
}
