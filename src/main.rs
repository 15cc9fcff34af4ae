//! 애플리케이션 진입점
//!
//! 환경 변수 로딩 → 로깅 초기화 → 데이터 스토어 연결 → 의존성 조립 →
//! HTTP 서버 기동 순서로 진행합니다. 모든 서비스는 여기서 한 번 생성되어
//! `web::Data`로 핸들러에 주입됩니다.

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use handlebars::Handlebars;
use std::sync::Arc;

use secrets_gateway::caching::redis::RedisClient;
use secrets_gateway::config::ServerConfig;
use secrets_gateway::db::Database;
use secrets_gateway::repositories::users::UserRepository;
use secrets_gateway::routes::configure_all_routes;
use secrets_gateway::services::auth::{FacebookAuthService, GoogleAuthService, SessionService};
use secrets_gateway::services::users::UserService;
use secrets_gateway::views::register_views;

/// PROFILE에 따라 환경 변수 파일 로드
///
/// `PROFILE=dev` 이면 `.env.dev`를, 지정이 없으면 `.env`를 읽습니다.
/// 파일이 없어도 치명적이지 않습니다 (배포 환경은 실제 env를 사용).
fn load_env_file() {
    match std::env::var("PROFILE") {
        Ok(profile) => {
            let filename = format!(".env.{}", profile);
            if dotenv::from_filename(&filename).is_ok() {
                println!("환경 변수 파일 로드: {}", filename);
            }
        }
        Err(_) => {
            if dotenv::dotenv().is_ok() {
                println!("환경 변수 파일 로드: .env");
            }
        }
    }
}

/// 환경 변수에서 요청 속도 제한 설정 로드
///
/// `RATE_LIMIT_PER_SECOND`는 초당 허용 요청 수, `RATE_LIMIT_BURST_SIZE`는
/// 순간 버스트 허용량입니다. 지정이 없거나 파싱에 실패하면 (2, 20)을
/// 사용합니다.
fn load_rate_limit_config() -> (u64, u32) {
    let per_second: u64 = std::env::var("RATE_LIMIT_PER_SECOND")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(2);
    let burst_size: u32 = std::env::var("RATE_LIMIT_BURST_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);

    (per_second, burst_size)
}

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,actix_web=debug"),
    )
    .init();
}

/// MongoDB / Redis 연결 초기화
async fn initialize_data_stores() -> Result<(Arc<Database>, Arc<RedisClient>), std::io::Error> {
    let database = Database::new()
        .await
        .map_err(|e| std::io::Error::other(format!("MongoDB 연결 실패: {}", e)))?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| std::io::Error::other(format!("Redis 연결 실패: {}", e)))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    let (database, redis_client) = initialize_data_stores().await?;

    // 리포지토리 / 서비스 조립 (명시적 의존성 주입)
    let user_repo = Arc::new(UserRepository::new(database.clone(), redis_client.clone()));

    if let Err(e) = user_repo.create_indexes().await {
        log::warn!("인덱스 생성 실패 (계속 진행): {}", e);
    }

    let user_service = web::Data::new(UserService::new(user_repo.clone()));
    let session_service = web::Data::new(SessionService::new(redis_client.clone()));
    let google_auth_service = web::Data::new(GoogleAuthService::new(
        user_repo.clone(),
        redis_client.clone(),
    ));
    let facebook_auth_service = web::Data::new(FacebookAuthService::new(
        user_repo.clone(),
        redis_client.clone(),
    ));

    let mut template_registry = Handlebars::new();
    register_views(&mut template_registry)
        .map_err(|e| std::io::Error::other(format!("뷰 초기화 실패: {}", e)))?;
    let template_registry = web::Data::new(template_registry);

    // 요청 속도 제한 (기본: 초당 2회 허용, 버스트 20)
    let (rate_limit_per_second, rate_limit_burst) = load_rate_limit_config();

    let governor_config = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_per_second)
        .burst_size(rate_limit_burst)
        .finish()
        .ok_or_else(|| std::io::Error::other("rate limiter 설정 실패"))?;

    let bind_address = ServerConfig::bind_address();
    log::info!("🚀 Secrets Gateway 서버 시작: http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Governor::new(&governor_config))
            .app_data(user_service.clone())
            .app_data(session_service.clone())
            .app_data(google_auth_service.clone())
            .app_data(facebook_auth_service.clone())
            .app_data(template_registry.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_defaults() {
        if std::env::var("RATE_LIMIT_PER_SECOND").is_err()
            && std::env::var("RATE_LIMIT_BURST_SIZE").is_err()
        {
            assert_eq!(load_rate_limit_config(), (2, 20));
        }
    }

    #[test]
    fn test_governor_config_builds_with_defaults() {
        // 초당 허용량이 요청 주기로 뒤집혀 설정되지 않도록,
        // 기동 시와 동일하게 requests_per_second로 빌드되는지 확인한다.
        let (per_second, burst_size) = load_rate_limit_config();

        let config = GovernorConfigBuilder::default()
            .requests_per_second(per_second)
            .burst_size(burst_size)
            .finish();

        assert!(config.is_some());
    }
}
