//! # 에러 처리 모듈
//!
//! Tutorial API에서 발생할 수 있는 에러 타입을 정의합니다.
//!
//! 에러는 두 종류뿐입니다:
//! - `NotFound`: id로 지정한 Tutorial이 없음 → HTTP 404
//! - `Database`: 그 밖의 모든 데이터 접근 실패 → HTTP 500
//!
//! 두 경우 모두 응답 본문은 비어 있습니다.
//! 실패 원인(제약 조건 위반, 연결 끊김 등)은 로그에만 남기고 클라이언트에는 노출하지 않습니다.

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (404, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
};
use thiserror::Error; // thiserror: #[derive(Error)]로 Display와 std::error::Error를 자동 구현

// enum(열거형): 여러 가능한 값 중 하나를 나타내는 타입입니다.
// match로 모든 경우를 빠짐없이 처리해야 하므로(exhaustive matching),
// variant를 추가하면 into_response에서 컴파일러가 누락을 알려줍니다.

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러가 `Result<T, AppError>`를 반환하면
/// Axum이 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 Tutorial을 찾을 수 없음 (HTTP 404)
    // #[error("...")]: 이 variant의 Display 메시지 (로그 출력 시 사용)
    #[error("Tutorial not found")]
    NotFound,

    /// 데이터베이스 오류 (HTTP 500)
    /// #[from] 덕분에 sqlx 호출 뒤의 `?`가 sqlx::Error를 자동으로 AppError::Database로 바꿉니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

// impl IntoResponse for AppError:
// 핸들러가 Err(AppError)를 반환하면 Axum이 이 메서드로 HTTP 응답을 만듭니다.
impl IntoResponse for AppError {
    /// AppError를 본문 없는 HTTP 응답으로 변환합니다.
    fn into_response(self) -> Response {
        // match: enum의 각 variant에 대해 상태 코드를 고릅니다.
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            // ref: 값을 이동(move)하지 않고 참조만 빌려옵니다
            AppError::Database(ref e) => {
                // 원인은 서버 로그에만 남깁니다
                tracing::error!("Database error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // StatusCode 자체도 IntoResponse를 구현하므로 본문이 빈 응답이 만들어집니다.
        status.into_response()
    }
}
