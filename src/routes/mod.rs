//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터 구성을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버/DB 상태 확인 (헬스체크)
//! - `tutorials`: Tutorial CRUD 핸들러

pub mod health;
pub mod tutorials;

pub use health::*;
pub use tutorials::*;

use crate::db::TutorialRepository;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

/// 애플리케이션 공유 상태
///
/// 핸들러는 `State(state): State<AppState>`로 저장소에 접근합니다.
/// 저장소는 main에서 직접 만들어 넣습니다. 테스트에서는 인메모리 DB를 쓰는 저장소를 넣습니다.
#[derive(Clone)]
pub struct AppState {
    pub tutorials: Arc<dyn TutorialRepository>,
}

impl AppState {
    pub fn new(tutorials: impl TutorialRepository + 'static) -> Self {
        Self {
            tutorials: Arc::new(tutorials),
        }
    }
}

/// API 라우터를 구성합니다.
///
/// CORS와 요청 로깅 레이어는 main에서 씌웁니다.
///
/// 경로 세그먼트가 겹칠 때는 고정 경로가 `{id}` 캡처보다 우선합니다.
/// `/all`, `/published`는 `/{id}`로, `/delete/all`은 `/delete/{id}`로 가지 않습니다.
pub fn router(state: AppState) -> Router {
    let tutorial_routes = Router::new()
        .route("/all", get(list_tutorials))
        .route("/published", get(list_published_tutorials))
        .route("/create", post(create_tutorial))
        .route("/update/{id}", put(update_tutorial))
        .route("/delete/all", delete(delete_all_tutorials))
        .route("/delete/{id}", delete(delete_tutorial))
        .route("/{id}", get(get_tutorial));

    Router::new()
        .nest("/api/tutorials", tutorial_routes)
        .route("/api/health", get(health_check))
        .with_state(state)
}
