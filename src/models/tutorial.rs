//! # Tutorial 모델 정의
//!
//! ## 구조체 역할
//! - `Tutorial`: DB의 `tutorials` 테이블 한 행(row) (응답용)
//! - `CreateTutorialRequest`: 생성 요청 본문
//! - `TutorialFields`: 수정 요청 본문이자, 저장소가 실제로 기록하는 값
//! - `ListTutorialsQuery`: 목록 조회의 쿼리스트링 (`?title=...`)

use serde::{Deserialize, Serialize};

/// Tutorial 엔티티
///
/// `id`는 SQLite가 할당하며 한 번 정해지면 바뀌지 않습니다.
/// `title`과 `description`은 DB 수준에서 NULL을 허용하므로 Option입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tutorial {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub published: bool,
}

/// 생성 요청: `POST /api/tutorials/create`
///
/// `published` 필드는 일부러 두지 않았습니다.
/// serde는 모르는 필드를 무시하므로 클라이언트가 `"published": true`를 보내도 버려집니다.
#[derive(Debug, Deserialize)]
pub struct CreateTutorialRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CreateTutorialRequest {
    /// 저장할 값으로 변환합니다. 새 Tutorial은 항상 미게시 상태로 시작합니다.
    pub fn into_fields(self) -> TutorialFields {
        TutorialFields {
            title: self.title,
            description: self.description,
            published: false,
        }
    }
}

/// Tutorial의 변경 가능한 세 필드
///
/// 수정(`PUT /api/tutorials/update/{id}`)은 부분 수정이 아니라 전체 덮어쓰기입니다.
/// 본문에서 빠진 `title`/`description`은 null로, `published`는 false로 기록됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct TutorialFields {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub published: bool,
}

/// 목록 조회 쿼리스트링: `GET /api/tutorials/all?title=...`
#[derive(Debug, Default, Deserialize)]
pub struct ListTutorialsQuery {
    /// 제목 부분 문자열 (대소문자 무시). 없으면 전체 조회
    pub title: Option<String>,
}
