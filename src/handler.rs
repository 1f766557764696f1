use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::ApiError,
    guard, operation,
    middleware::Username,
    schema::{CreateUserSchema, TodoSchema},
    AppState,
};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "In-memory to-do API with free and pro plans";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for registering a new User
pub async fn create_user(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<CreateUserSchema>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload?;

    let mut store = data.store.lock().await;
    let user = operation::register_user(&mut store, body)?;

    Ok((StatusCode::CREATED, Json(user)))
}

// Handler for fetching a User by ID
pub async fn get_user(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = data.store.lock().await;
    let context = guard::user_by_id(&mut store, &id)?;

    Ok(Json(operation::get_user(context)))
}

// Handler for moving a User to the pro plan
pub async fn upgrade_to_pro(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = data.store.lock().await;
    let context = guard::user_by_id(&mut store, &id)?;
    let user = operation::upgrade_to_pro(context)?;

    Ok(Json(user))
}

// Handler for getting all Todo items of the calling User
pub async fn get_todos(
    State(data): State<Arc<AppState>>,
    Username(username): Username,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = data.store.lock().await;
    let context = guard::user_by_username(&mut store, &username)?;

    Ok(Json(operation::list_todos(context)))
}

// Handler for creating a new Todo
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    Username(username): Username,
    payload: Result<Json<TodoSchema>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = data.store.lock().await;
    let context = guard::user_by_username(&mut store, &username)?;
    let context = guard::check_quota(context)?;
    // The body is only looked at once every guard has passed
    let Json(body) = payload?;
    let todo = operation::create_todo(context, body);

    Ok((StatusCode::CREATED, Json(todo)))
}

// Handler for updating a Todo by ID
pub async fn update_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
    Username(username): Username,
    payload: Result<Json<TodoSchema>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = data.store.lock().await;
    let context = guard::todo_exists(&mut store, &username, &id)?;
    let Json(body) = payload?;

    Ok(Json(operation::update_todo(context, body)))
}

// Handler for marking a Todo as done
pub async fn complete_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
    Username(username): Username,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = data.store.lock().await;
    let context = guard::todo_exists(&mut store, &username, &id)?;

    Ok(Json(operation::complete_todo(context)))
}

// Handler for deleting a Todo by ID
pub async fn delete_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
    Username(username): Username,
) -> Result<impl IntoResponse, ApiError> {
    let mut store = data.store.lock().await;
    let context = guard::todo_exists(&mut store, &username, &id)?;
    operation::delete_todo(context)?;

    Ok(StatusCode::NO_CONTENT)
}
