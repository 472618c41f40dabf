//! # Tutorial 저장소(Repository)
//!
//! `tutorials` 테이블에 대한 CRUD와 두 가지 필터 조회를 제공합니다.
//!
//! 라우트 핸들러는 구체 타입이 아니라 `TutorialRepository` 트레이트에 의존합니다.
//! main에서 `SqliteTutorialRepository`를 만들어 `AppState`에 넣어 전달합니다.

use crate::error::AppError;
use crate::models::*;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Tutorial 저장소 인터페이스
///
/// `#[async_trait]`: 트레이트의 async fn을 `Pin<Box<dyn Future + Send>>`로 바꿔 줍니다.
/// 덕분에 `Arc<dyn TutorialRepository>`처럼 트레이트 객체로 공유할 수 있습니다.
///
/// `Send + Sync`: 여러 요청(스레드)이 동시에 같은 저장소를 사용하기 때문에 필요합니다.
#[async_trait]
pub trait TutorialRepository: Send + Sync {
    /// 모든 Tutorial을 id 순으로 조회합니다.
    async fn find_all(&self) -> Result<Vec<Tutorial>, AppError>;

    /// id로 Tutorial 하나를 조회합니다. 없으면 `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError>;

    /// Tutorial을 저장하고 저장된 행을 반환합니다.
    ///
    /// - `id`가 None: 새 행을 삽입하고 DB가 id를 할당합니다
    /// - `id`가 Some: 해당 행을 덮어씁니다. 행이 없으면 `AppError::NotFound`
    ///   (삭제된 id로 행을 다시 만들지 않습니다)
    async fn save(&self, id: Option<i64>, fields: &TutorialFields) -> Result<Tutorial, AppError>;

    /// id로 삭제합니다. 실제로 삭제된 행이 있었는지를 반환합니다.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// 모든 행을 삭제하고 삭제된 행 수를 반환합니다.
    async fn delete_all(&self) -> Result<u64, AppError>;

    /// `published` 값이 정확히 일치하는 Tutorial 목록
    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError>;

    /// 제목에 `title`이 포함된(대소문자 무시) Tutorial 목록
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>, AppError>;

    /// DB 연결 상태 확인 (헬스체크용)
    async fn ping(&self) -> Result<(), AppError>;
}

/// SQLite 기반 저장소 구현
///
/// `SqlitePool`은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
#[derive(Clone)]
pub struct SqliteTutorialRepository {
    pool: SqlitePool,
}

impl SqliteTutorialRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorialRepository for SqliteTutorialRepository {
    async fn find_all(&self) -> Result<Vec<Tutorial>, AppError> {
        let tutorials = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tutorial>, AppError> {
        // fetch_optional: 0행이면 None, 1행이면 Some
        let tutorial = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tutorial)
    }

    /// `RETURNING`으로 DB에 실제 기록된 값을 바로 돌려받습니다.
    ///
    /// 수정은 upsert가 아니라 `UPDATE ... WHERE id = ?` 한 문장입니다.
    /// 존재 확인과 수정 사이에 삭제가 끼어들 틈이 없어서, 삭제된 id의 행이 되살아나지 않습니다.
    async fn save(&self, id: Option<i64>, fields: &TutorialFields) -> Result<Tutorial, AppError> {
        // let-else: id가 없으면(None) 새 행을 삽입하고 바로 반환합니다
        let Some(id) = id else {
            let tutorial = sqlx::query_as::<_, Tutorial>(
                r#"
                INSERT INTO tutorials (title, description, published)
                VALUES (?, ?, ?)
                RETURNING id, title, description, published
                "#,
            )
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(fields.published)
            .fetch_one(&self.pool)
            .await?;

            return Ok(tutorial);
        };

        // fetch_optional: 갱신된 행이 없으면(해당 id가 없으면) None → 404
        sqlx::query_as::<_, Tutorial>(
            r#"
            UPDATE tutorials
            SET title = ?, description = ?, published = ?
            WHERE id = ?
            RETURNING id, title, description, published
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.published)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tutorials WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM tutorials")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_by_published(&self, published: bool) -> Result<Vec<Tutorial>, AppError> {
        let tutorials = sqlx::query_as::<_, Tutorial>(
            "SELECT id, title, description, published FROM tutorials WHERE published = ? ORDER BY id",
        )
        .bind(published)
        .fetch_all(&self.pool)
        .await?;

        Ok(tutorials)
    }

    /// 대소문자 비교는 Rust의 `str::to_lowercase`로 합니다.
    /// SQLite의 `lower()`는 ASCII만 바꾸기 때문에 "ÉCOLE"과 "école"을 같은 글자로 보지 못합니다.
    ///
    /// 검색어의 `%`, `_`는 와일드카드가 아니라 글자 그대로 비교됩니다.
    /// 제목이 NULL인 행은 빈 문자열로 취급하므로 빈 검색어는 모든 행과 일치합니다.
    async fn find_by_title_containing(&self, title: &str) -> Result<Vec<Tutorial>, AppError> {
        let needle = title.to_lowercase();

        let tutorials = self
            .find_all()
            .await?
            .into_iter()
            .filter(|t| {
                t.title
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle)
            })
            .collect();

        Ok(tutorials)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
