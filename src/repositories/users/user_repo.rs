//! 사용자 리포지토리
//!
//! MongoDB `users` 컬렉션에 대한 데이터 액세스 계층입니다.
//! ID 조회에는 Redis read-through 캐시를 사용하며, 쓰기 시 캐시를
//! 무효화합니다.

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson},
    options::IndexOptions,
    Collection, IndexModel,
};
use std::sync::Arc;

use crate::caching::redis::RedisClient;
use crate::db::Database;
use crate::domain::entities::User;
use crate::errors::errors::{AppError, AppResult};

/// 사용자 캐시 TTL (초)
const USER_CACHE_TTL_SECONDS: u64 = 600;

/// 사용자 데이터 액세스 리포지토리
pub struct UserRepository {
    collection: Collection<User>,
    redis_client: Arc<RedisClient>,
}

impl UserRepository {
    pub fn new(database: Arc<Database>, redis_client: Arc<RedisClient>) -> Self {
        let collection = database.get_database().collection::<User>("users");

        Self {
            collection,
            redis_client,
        }
    }

    fn cache_key(user_id: &str) -> String {
        format!("user:{}", user_id)
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 사용자명은 전역 unique, OAuth 프로바이더 ID는 sparse unique로
    /// 설정하여 같은 프로바이더 계정으로 중복 사용자가 생기지 않도록
    /// 보장합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let google_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder().unique(true).sparse(true).build())
            .build();

        let facebook_index = IndexModel::builder()
            .keys(doc! { "facebook_id": 1 })
            .options(IndexOptions::builder().unique(true).sparse(true).build())
            .build();

        self.collection
            .create_indexes(vec![username_index, google_index, facebook_index])
            .await
            .map_err(|e| AppError::DatabaseError(format!("인덱스 생성 실패: {}", e)))?;

        log::info!("✅ users 컬렉션 인덱스 생성 완료");
        Ok(())
    }

    /// 사용자명으로 사용자 조회
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자명 조회 실패: {}", e)))
    }

    /// Google ID로 사용자 조회
    pub async fn find_by_google_id(&self, google_id: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "google_id": google_id })
            .await
            .map_err(|e| AppError::DatabaseError(format!("Google ID 조회 실패: {}", e)))
    }

    /// Facebook ID로 사용자 조회
    pub async fn find_by_facebook_id(&self, facebook_id: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "facebook_id": facebook_id })
            .await
            .map_err(|e| AppError::DatabaseError(format!("Facebook ID 조회 실패: {}", e)))
    }

    /// ID로 사용자 조회 (Redis 캐시 우선)
    pub async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let cache_key = Self::cache_key(user_id);

        // 캐시 히트 시 MongoDB를 건드리지 않음
        if let Ok(Some(cached)) = self.redis_client.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError(format!("잘못된 사용자 ID: {}", user_id)))?;

        let user = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 조회 실패: {}", e)))?;

        if let Some(ref found) = user {
            // 캐시 저장 실패는 치명적이지 않으므로 로그만 남김
            if let Err(e) = self
                .redis_client
                .set_with_expiry(&cache_key, found, USER_CACHE_TTL_SECONDS)
                .await
            {
                log::warn!("사용자 캐시 저장 실패: {}", e);
            }
        }

        Ok(user)
    }

    /// 새 사용자 생성
    ///
    /// 삽입된 문서의 ObjectId를 채워 돌려줍니다.
    pub async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            // unique 인덱스 위반은 중복 가입으로 취급
            if e.to_string().contains("E11000") {
                AppError::ConflictError("이미 등록된 사용자입니다".to_string())
            } else {
                AppError::DatabaseError(format!("사용자 생성 실패: {}", e))
            }
        })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    /// 사용자의 secret 저장 (기존 값 덮어씀)
    pub async fn set_secret(&self, user_id: &str, secret: &str) -> AppResult<()> {
        let object_id = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError(format!("잘못된 사용자 ID: {}", user_id)))?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": object_id },
                doc! {
                    "$set": {
                        "secret": secret,
                        "updated_at": mongodb::bson::DateTime::now(),
                    }
                },
            )
            .await
            .map_err(|e| AppError::DatabaseError(format!("secret 저장 실패: {}", e)))?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "사용자를 찾을 수 없습니다: {}",
                user_id
            )));
        }

        // 캐시 무효화
        if let Err(e) = self.redis_client.del(&Self::cache_key(user_id)).await {
            log::warn!("사용자 캐시 무효화 실패: {}", e);
        }

        Ok(())
    }

    /// secret을 제출한 모든 사용자 조회
    pub async fn find_with_secret(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! { "secret": { "$ne": Bson::Null } })
            .await
            .map_err(|e| AppError::DatabaseError(format!("secrets 조회 실패: {}", e)))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(format!("secrets 커서 수집 실패: {}", e)))
    }
}
