//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 라우트 핸들러(routes/)는 이 모듈의 `TutorialRepository`를 통해서만 DB에 접근합니다.
//!
//! 하위 모듈:
//! - `tutorials`: 저장소 트레이트와 SQLite 구현

pub mod tutorials;

pub use tutorials::*;

use sqlx::SqlitePool;

/// `tutorials` 테이블 정의
///
/// `AUTOINCREMENT`: 삭제된 행의 id를 다시 쓰지 않습니다.
/// 한 id는 수명 동안 하나의 Tutorial만 가리킵니다.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tutorials (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT,
    description TEXT,
    published   BOOLEAN NOT NULL DEFAULT 0
)
"#;

/// 테이블이 없으면 생성합니다. 서버 시작 시 한 번 호출합니다.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    Ok(())
}

/// 테스트용 인메모리 DB 풀
///
/// `sqlite::memory:`는 연결마다 별도의 DB가 생기므로 연결을 1개로 제한합니다.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
