//! 에러 처리 모듈
//!
//! 게이트웨이 전역에서 사용하는 [`AppError`](errors::AppError)와
//! 리다이렉트 기반 에러 응답 변환을 제공합니다.

pub mod errors;
