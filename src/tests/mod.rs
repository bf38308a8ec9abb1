use crate::directory::{RefreshSummary, UserDirectory};
use crate::roster_service::RosterServiceImpl;
use crate::routes;
use crate::Settings;
use actix_web::http::StatusCode;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{test, App};
use async_trait::async_trait;
use mockall::*;
use roster_core::{LoadError, Snapshot, User};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

mock! {
    pub Directory {}
    #[async_trait]
    impl UserDirectory for Directory {
        async fn refresh(&self) -> Result<RefreshSummary, LoadError>;
        async fn users(&self) -> Arc<Snapshot>;
        fn source(&self) -> PathBuf;
    }
}

fn sample_snapshot() -> Arc<Snapshot> {
    let users = vec![
        User::new("Alice", "alice@example.com", 30, "Backend", "2024-01-01").unwrap(),
        User::new("Bob", "bob@example.com", 25, "Frontend", "2024-02-01").unwrap(),
        User::new("Charlie", "charlie@example.com", 35, "Backend", "2024-03-01").unwrap(),
    ];
    Arc::new(Snapshot::from_users(users))
}

fn directory_with(snapshot: Arc<Snapshot>) -> MockDirectory {
    let mut directory = MockDirectory::new();
    directory
        .expect_users()
        .returning(move || snapshot.clone());
    directory
}

async fn call(directory: Arc<dyn UserDirectory>, request: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .app_data(Data::from(directory))
            .configure(routes::configure),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn get(directory: MockDirectory, uri: &str) -> (StatusCode, Value) {
    call(Arc::new(directory), test::TestRequest::get().uri(uri)).await
}

fn names(data: &Value) -> Vec<&str> {
    data.as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect()
}

#[actix_web::test]
async fn test_hello_world() {
    let (status, body) = get(MockDirectory::new(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "Hello World, you're using API Collaborators");
}

#[actix_web::test]
async fn test_read_users_all() {
    let (status, body) = get(directory_with(sample_snapshot()), "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "Getting Users Data");
    assert_eq!(names(&body["data"]), vec!["Alice", "Bob", "Charlie"]);
}

#[actix_web::test]
async fn test_read_users_trailing_slash() {
    let (status, body) = get(directory_with(sample_snapshot()), "/users/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_read_users_filtered_team() {
    let (status, body) = get(directory_with(sample_snapshot()), "/users?team=Backend").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body["data"]), vec!["Alice", "Charlie"]);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|u| u["team"] == "Backend"));
}

#[actix_web::test]
async fn test_read_users_unknown_team_is_empty() {
    let (status, body) = get(directory_with(sample_snapshot()), "/users?team=backend").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_read_users_no_users() {
    let (status, body) = get(directory_with(Arc::new(Snapshot::default())), "/users").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert_eq!(body["message"], "No Users Data Available");
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn test_refresh_users_route() {
    let mut directory = MockDirectory::new();
    directory.expect_refresh().times(1).return_once(|| {
        Ok(RefreshSummary {
            loaded_users: 3,
            skipped_rows: 1,
            generation: 2,
            loaded_at: None,
        })
    });

    let (status, body) = get(directory, "/users/refresh").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Refreshing Users Data");
    assert_eq!(body["data"]["loadedUsers"], 3);
    assert_eq!(body["data"]["skippedRows"], 1);
    assert_eq!(body["data"]["generation"], 2);
}

#[actix_web::test]
async fn test_refresh_users_accepts_post() {
    let mut directory = MockDirectory::new();
    directory.expect_refresh().times(1).return_once(|| {
        Ok(RefreshSummary {
            loaded_users: 0,
            skipped_rows: 0,
            generation: 1,
            loaded_at: None,
        })
    });

    let (status, _) = call(
        Arc::new(directory),
        test::TestRequest::post().uri("/users/refresh"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_refresh_schema_error() {
    let mut directory = MockDirectory::new();
    directory.expect_refresh().times(1).return_once(|| {
        Err(LoadError::Schema {
            expected: vec!["name".into(), "email".into(), "age".into(), "team".into(), "start_date".into()],
            found: vec!["name".into(), "email".into(), "age".into(), "team".into()],
        })
    });

    let (status, body) = get(directory, "/users/refresh").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], 422);
    assert!(body["message"].as_str().unwrap().contains("invalid CSV header"));
}

#[actix_web::test]
async fn test_refresh_missing_file_hides_path() {
    let mut directory = MockDirectory::new();
    directory
        .expect_refresh()
        .times(1)
        .return_once(|| Err(LoadError::NotFound(PathBuf::from("/secret/users.csv"))));

    let (status, body) = get(directory, "/users/refresh").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert_eq!(body["message"], "failed to load users data");
}

#[actix_web::test]
async fn test_stats_all_users() {
    let (status, body) = get(directory_with(sample_snapshot()), "/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "success");
    let data = &body["data"];
    assert_eq!(data["totalUsers"], 3);
    assert_eq!(data["countedUsers"], 3);
    assert_eq!(data["averageAgeOfUsers"], 30.0);
    assert_eq!(names(&data["oldestUsers"]), vec!["Charlie", "Alice", "Bob"]);
}

#[actix_web::test]
async fn test_stats_for_team_with_top() {
    let (status, body) = get(directory_with(sample_snapshot()), "/stats?team=Backend&top=1").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["totalUsers"], 3);
    assert_eq!(data["countedUsers"], 2);
    assert_eq!(data["averageAgeOfUsers"], 32.5);
    assert_eq!(names(&data["oldestUsers"]), vec!["Charlie"]);
}

#[actix_web::test]
async fn test_stats_rejects_negative_top() {
    let (status, _) = get(directory_with(sample_snapshot()), "/stats?top=-2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_stats_no_users() {
    let (status, body) = get(directory_with(Arc::new(Snapshot::default())), "/stats").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "No Users Data Available");
    assert_eq!(body["data"]["totalUsers"], 0);
}

#[actix_web::test]
async fn test_health_live() {
    let (status, body) = get(MockDirectory::new(), "/health/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "alive");
}

#[actix_web::test]
async fn test_health_ready() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_path_buf();

    let mut directory = directory_with(sample_snapshot());
    directory.expect_source().return_const(path);

    let (status, body) = get(directory, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ready");
    assert_eq!(body["data"]["loadedUsers"], 3);
}

#[actix_web::test]
async fn test_health_not_ready_without_source() {
    let dir = tempfile::tempdir().unwrap();
    let mut directory = directory_with(sample_snapshot());
    directory
        .expect_source()
        .return_const(dir.path().join("missing.csv"));

    let (status, body) = get(directory, "/health/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], 503);
    assert_eq!(body["message"], "not ready");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_refresh_cycle_against_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");
    std::fs::write(
        &path,
        "name,email,age,team,start_date\n\
         Alice,alice@x.com,30,Backend,2024-01-01\n\
         Bob,bob@x.com,25,Frontend,2024-02-01\n\
         Charlie,charlie@x.com,35,Backend,2024-03-01\n",
    )
    .unwrap();

    let mut settings = Settings::default();
    settings.data.path = path.clone();
    let directory: Arc<dyn UserDirectory> = Arc::new(RosterServiceImpl::new(&settings));

    let (status, _) = call(directory.clone(), test::TestRequest::get().uri("/users")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = call(directory.clone(), test::TestRequest::get().uri("/users/refresh")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["loadedUsers"], 3);

    std::fs::write(&path, "name,email,age,team\nZed,zed@x.com,50,Ops\n").unwrap();
    let (status, _) = call(directory.clone(), test::TestRequest::get().uri("/users/refresh")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = call(directory, test::TestRequest::get().uri("/users?team=Backend")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body["data"]), vec!["Alice", "Charlie"]);
}
