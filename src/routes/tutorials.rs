//! # Tutorial API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 성공 응답 |
//! |--------|------|--------|-----------|
//! | GET | /api/tutorials/all?title= | `list_tutorials` | 200 + 배열 |
//! | GET | /api/tutorials/{id} | `get_tutorial` | 200 / 404 |
//! | GET | /api/tutorials/published | `list_published_tutorials` | 200 + 배열 / 204 |
//! | POST | /api/tutorials/create | `create_tutorial` | 201 + 생성된 Tutorial |
//! | PUT | /api/tutorials/update/{id} | `update_tutorial` | 200 / 404 |
//! | DELETE | /api/tutorials/delete/{id} | `delete_tutorial` | 204 |
//! | DELETE | /api/tutorials/delete/all | `delete_all_tutorials` | 204 |
//!
//! DB 에러는 모두 `AppError::Database`로 전파되어 본문 없는 500 응답이 됩니다.
//! 잘못된 id(`/api/tutorials/abc`)나 JSON 본문은 Axum 추출자가 저장소 호출 전에 거부합니다.

use crate::{error::AppError, models::*, routes::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// 전체 목록 또는 제목 필터 결과를 조회합니다.
///
/// `GET /api/tutorials/all` → 전체
/// `GET /api/tutorials/all?title=tu` → 제목에 "tu"가 들어간 Tutorial (대소문자 무시)
///
/// `title`이 없거나 빈 문자열이면 모든 Tutorial과 일치하므로 필터 없이 전체를 조회합니다.
pub async fn list_tutorials(
    State(state): State<AppState>,
    Query(query): Query<ListTutorialsQuery>,
) -> Result<Json<Vec<Tutorial>>, AppError> {
    let tutorials = match query.title.as_deref() {
        None | Some("") => state.tutorials.find_all().await?,
        Some(title) => state.tutorials.find_by_title_containing(title).await?,
    };
    Ok(Json(tutorials))
}

/// `GET /api/tutorials/{id}`: 단일 Tutorial 조회
pub async fn get_tutorial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Tutorial>, AppError> {
    let tutorial = state
        .tutorials
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(tutorial))
}

/// 게시된(published = true) Tutorial 목록을 조회합니다.
///
/// 결과가 비어 있으면 빈 배열 대신 `204 No Content`를 반환합니다.
/// 두 경우의 응답 형태가 달라서 반환 타입을 `Response`로 통일합니다.
pub async fn list_published_tutorials(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let tutorials = state.tutorials.find_by_published(true).await?;
    if tutorials.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(tutorials).into_response())
}

/// 새 Tutorial을 생성합니다.
///
/// `POST /api/tutorials/create` + `{ "title": "...", "description": "..." }` → `201 Created`
///
/// 본문에 `published`가 있어도 무시하고 항상 false로 저장합니다.
pub async fn create_tutorial(
    State(state): State<AppState>,
    Json(req): Json<CreateTutorialRequest>,
) -> Result<(StatusCode, Json<Tutorial>), AppError> {
    let tutorial = state.tutorials.save(None, &req.into_fields()).await?;
    tracing::debug!(id = tutorial.id, "Created tutorial");
    Ok((StatusCode::CREATED, Json(tutorial)))
}

/// 기존 Tutorial의 세 필드를 모두 덮어씁니다.
///
/// `PUT /api/tutorials/update/{id}` + `{ "title", "description", "published" }`
pub async fn update_tutorial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(fields): Json<TutorialFields>,
) -> Result<Json<Tutorial>, AppError> {
    // 해당 id의 행이 없으면 저장소가 AppError::NotFound를 반환합니다 → 404
    let tutorial = state.tutorials.save(Some(id), &fields).await?;
    Ok(Json(tutorial))
}

/// `DELETE /api/tutorials/delete/{id}` → `204 No Content`
///
/// 없는 id를 삭제해도 404가 아니라 204입니다.
pub async fn delete_tutorial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted = state.tutorials.delete_by_id(id).await?;
    if !deleted {
        tracing::debug!(id, "Delete requested for missing tutorial");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/tutorials/delete/all` → `204 No Content`
pub async fn delete_all_tutorials(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let count = state.tutorials.delete_all().await?;
    tracing::info!(count, "Deleted all tutorials");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::db::{test_pool, SqliteTutorialRepository};
    use crate::routes::{router, AppState};
    use axum::body::{Body, Bytes};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn make_app() -> Router {
        router(AppState::new(SqliteTutorialRepository::new(test_pool().await)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        (status, bytes)
    }

    fn json_of(bytes: &Bytes) -> Value {
        serde_json::from_slice(bytes).unwrap()
    }

    async fn create(app: &Router, title: &str, description: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/tutorials/create",
            Some(json!({ "title": title, "description": description })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        json_of(&body)
    }

    async fn publish(app: &Router, id: i64, title: &str) {
        let (status, _) = send(
            app,
            Method::PUT,
            &format!("/api/tutorials/update/{id}"),
            Some(json!({ "title": title, "description": "d", "published": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn create_update_delete_get_scenario() {
        let app = make_app().await;

        let created = create(&app, "A", "d").await;
        assert_eq!(
            created,
            json!({ "id": 1, "title": "A", "description": "d", "published": false })
        );

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/tutorials/update/1",
            Some(json!({ "title": "B", "description": "d2", "published": true })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_of(&body),
            json!({ "id": 1, "title": "B", "description": "d2", "published": true })
        );

        let (status, body) = send(&app, Method::DELETE, "/api/tutorials/delete/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        let (status, body) = send(&app, Method::GET, "/api/tutorials/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn create_forces_published_false() {
        let app = make_app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/tutorials/create",
            Some(json!({ "title": "A", "description": "d", "published": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json_of(&body)["published"], false);
    }

    #[tokio::test]
    async fn get_returns_what_was_created() {
        let app = make_app().await;
        let created = create(&app, "Intro", "first steps").await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = send(&app, Method::GET, &format!("/api/tutorials/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), created);
    }

    #[tokio::test]
    async fn list_without_data_returns_empty_array() {
        let app = make_app().await;

        let (status, body) = send(&app, Method::GET, "/api/tutorials/all", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_of(&body), json!([]));
    }

    #[tokio::test]
    async fn list_filters_by_title_case_insensitively() {
        let app = make_app().await;
        create(&app, "Tutorial One", "d").await;
        create(&app, "Rust Basics", "d").await;

        let (_, body) = send(&app, Method::GET, "/api/tutorials/all", None).await;
        assert_eq!(json_of(&body).as_array().unwrap().len(), 2);

        let (_, body) = send(&app, Method::GET, "/api/tutorials/all?title=", None).await;
        assert_eq!(json_of(&body).as_array().unwrap().len(), 2);

        let (status, body) = send(&app, Method::GET, "/api/tutorials/all?title=tu", None).await;
        assert_eq!(status, StatusCode::OK);
        let found = json_of(&body);
        let found = found.as_array().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["title"], "Tutorial One");

        let (_, body) = send(&app, Method::GET, "/api/tutorials/all?title=BASIC", None).await;
        assert_eq!(json_of(&body)[0]["title"], "Rust Basics");
    }

    #[tokio::test]
    async fn published_returns_no_content_when_nothing_is_published() {
        let app = make_app().await;
        create(&app, "Draft", "d").await;

        let (status, body) = send(&app, Method::GET, "/api/tutorials/published", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn published_returns_only_published_tutorials() {
        let app = make_app().await;
        create(&app, "Draft", "d").await;
        let second = create(&app, "Live", "d").await;
        publish(&app, second["id"].as_i64().unwrap(), "Live").await;

        let (status, body) = send(&app, Method::GET, "/api/tutorials/published", None).await;
        assert_eq!(status, StatusCode::OK);
        let published = json_of(&body);
        let published = published.as_array().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0]["title"], "Live");
        assert_eq!(published[0]["published"], true);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_not_found() {
        let app = make_app().await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/tutorials/update/99",
            Some(json!({ "title": "B", "description": "d", "published": true })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // 404 응답이 행을 만들지 않아야 합니다
        let (_, body) = send(&app, Method::GET, "/api/tutorials/all", None).await;
        assert_eq!(json_of(&body), json!([]));
    }

    #[tokio::test]
    async fn update_after_delete_returns_not_found() {
        let app = make_app().await;
        create(&app, "A", "d").await;

        let (status, _) = send(&app, Method::DELETE, "/api/tutorials/delete/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/tutorials/update/1",
            Some(json!({ "title": "B", "description": "d2", "published": true })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());

        let (status, _) = send(&app, Method::GET, "/api/tutorials/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_filter_matches_non_ascii_titles_ignoring_case() {
        let app = make_app().await;
        create(&app, "ÉCOLE Rust", "d").await;
        create(&app, "Other", "d").await;

        let (status, body) = send(&app, Method::GET, "/api/tutorials/all?title=%C3%A9cole", None).await;
        assert_eq!(status, StatusCode::OK);
        let found = json_of(&body);
        let found = found.as_array().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0]["title"], "ÉCOLE Rust");
    }

    #[tokio::test]
    async fn update_overwrites_missing_fields() {
        let app = make_app().await;
        create(&app, "A", "d").await;
        publish(&app, 1, "A").await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/tutorials/update/1",
            Some(json!({ "title": "A2" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_of(&body),
            json!({ "id": 1, "title": "A2", "description": null, "published": false })
        );
    }

    #[tokio::test]
    async fn delete_unknown_id_still_returns_no_content() {
        let app = make_app().await;

        let (status, _) = send(&app, Method::DELETE, "/api/tutorials/delete/12345", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_all_removes_every_tutorial() {
        let app = make_app().await;
        create(&app, "A", "d").await;
        create(&app, "B", "d").await;

        let (status, _) = send(&app, Method::DELETE, "/api/tutorials/delete/all", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, "/api/tutorials/all", None).await;
        assert_eq!(json_of(&body), json!([]));
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = make_app().await;

        let (status, _) = send(&app, Method::GET, "/api/tutorials/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_failure_returns_500_without_body() {
        let pool = test_pool().await;
        let app = router(AppState::new(SqliteTutorialRepository::new(pool.clone())));
        pool.close().await;

        let (status, body) = send(&app, Method::GET, "/api/tutorials/all", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.is_empty());

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/tutorials/create",
            Some(json!({ "title": "A", "description": "d" })),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
