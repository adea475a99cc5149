use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    dto::MessageResponse,
    error::AppError,
    state::AppState,
    users::{dto::UserRequest, repo_types::User},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Ids that are not UUIDs cannot match any record.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    raw.parse::<Uuid>().map_err(|_| {
        warn!(id = %raw, "malformed user id");
        AppError::UserNotFound
    })
}

fn user_name(payload: Result<Json<UserRequest>, JsonRejection>) -> Result<String, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body.name),
        Err(e) => {
            warn!(error = %e, "rejected user payload");
            Err(AppError::InvalidUser)
        }
    }
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.store.list_users().await?))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id)?;
    state
        .store
        .get_user(id)
        .await?
        .map(Json)
        .ok_or(AppError::UserNotFound)
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let name = user_name(payload)?;
    let user = state.store.create_user(&name).await?;
    info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let id = parse_id(&id)?;
    let name = user_name(payload)?;
    let user = state
        .store
        .update_user(id, &name)
        .await?
        .ok_or(AppError::UserNotFound)?;
    info!(user_id = %user.id, "user renamed");
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    if !state.store.delete_user(id).await? {
        return Err(AppError::UserNotFound);
    }
    info!(user_id = %id, "user deleted");
    Ok(Json(MessageResponse::new("User deleted")))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::{app::build_app, state::AppState};

    fn test_server() -> TestServer {
        TestServer::new(build_app(AppState::fake())).expect("Could not create test server.")
    }

    async fn create(server: &TestServer, name: &str) -> Value {
        let response = server.post("/users").json(&json!({ "name": name })).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()
    }

    #[tokio::test]
    async fn create_and_fetch_user() {
        let server = test_server();
        let created = create(&server, "Ada").await;
        assert_eq!(created["name"], "Ada");
        let id = created["id"].as_str().expect("id should be a string");
        assert!(created.get("created_at").is_none());

        let response = server.get(&format!("/users/{id}")).await;
        response.assert_status_ok();
        response.assert_json(&created);
    }

    #[tokio::test]
    async fn lists_users_in_creation_order() {
        let server = test_server();
        assert!(server.get("/users").await.json::<Vec<Value>>().is_empty());

        create(&server, "first").await;
        create(&server, "second").await;

        let names: Vec<String> = server
            .get("/users")
            .await
            .json::<Vec<Value>>()
            .iter()
            .map(|u| u["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[tokio::test]
    async fn empty_name_is_allowed() {
        let server = test_server();
        let created = create(&server, "").await;
        assert_eq!(created["name"], "");
    }

    #[tokio::test]
    async fn rename_user() {
        let server = test_server();
        let created = create(&server, "Grace").await;
        let id = created["id"].as_str().unwrap();

        let response = server
            .put(&format!("/users/{id}"))
            .json(&json!({ "name": "Grace Hopper" }))
            .await;
        response.assert_status_ok();
        response.assert_json(&json!({ "id": id, "name": "Grace Hopper" }));

        server
            .get(&format!("/users/{id}"))
            .await
            .assert_json(&json!({ "id": id, "name": "Grace Hopper" }));
    }

    #[tokio::test]
    async fn delete_user() {
        let server = test_server();
        let created = create(&server, "Linus").await;
        let id = created["id"].as_str().unwrap();

        let response = server.delete(&format!("/users/{id}")).await;
        response.assert_status_ok();
        response.assert_json(&json!({ "message": "User deleted" }));

        let response = server.get(&format!("/users/{id}")).await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_user_is_not_found_for_every_verb() {
        let server = test_server();
        let missing = uuid::Uuid::new_v4();
        let not_found = json!({ "error": "User not found" });

        for path in [format!("/users/{missing}"), "/users/not-a-uuid".to_string()] {
            let response = server.get(&path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            response.assert_json(&not_found);

            let response = server.put(&path).json(&json!({ "name": "x" })).await;
            response.assert_status(StatusCode::NOT_FOUND);
            response.assert_json(&not_found);

            let response = server.delete(&path).await;
            response.assert_status(StatusCode::NOT_FOUND);
            response.assert_json(&not_found);
        }
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected() {
        let server = test_server();

        for body in [json!({}), json!({ "name": 42 })] {
            let response = server.post("/users").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "error": "Invalid user payload" }));
        }
        assert!(server.get("/users").await.json::<Vec<Value>>().is_empty());
    }
}
