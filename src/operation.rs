//! State transitions on entities resolved by [`crate::guard`].
//!
//! Every operation returns an owned snapshot of what it touched so the caller
//! can release the store lock before serialising.

use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    guard::{QuotaContext, TodoContext, UserContext},
    model::{Todo, User},
    schema::{CreateUserSchema, TodoSchema},
    store::UserStore,
};

/// Usernames are unique, compared case-sensitively.
pub fn register_user(store: &mut UserStore, body: CreateUserSchema) -> ApiResult<User> {
    if store.contains_username(&body.username) {
        return Err(ApiError::UsernameTaken);
    }

    let user = User::new(body.name, body.username);
    info!(id = %user.id, username = %user.username, "user registered");
    store.push(user.clone());
    Ok(user)
}

pub fn get_user(context: UserContext<'_>) -> User {
    context.user.clone()
}

/// Not idempotent: upgrading a pro account is a conflict.
pub fn upgrade_to_pro(context: UserContext<'_>) -> ApiResult<User> {
    let user = context.user;
    if user.pro {
        return Err(ApiError::AlreadyPro);
    }

    user.pro = true;
    info!(id = %user.id, username = %user.username, "upgraded to pro plan");
    Ok(user.clone())
}

pub fn list_todos(context: UserContext<'_>) -> Vec<Todo> {
    context.user.todos.clone()
}

pub fn create_todo(context: QuotaContext<'_>, body: TodoSchema) -> Todo {
    let todo = Todo::new(body.title, body.deadline);
    info!(id = %todo.id, username = %context.user.username, "todo created");
    context.user.todos.push(todo.clone());
    todo
}

// Both fields are overwritten; there is no partial update.
pub fn update_todo(mut context: TodoContext<'_>, body: TodoSchema) -> Todo {
    let todo = context.todo_mut();
    todo.title = body.title;
    todo.deadline = body.deadline;
    todo.clone()
}

pub fn complete_todo(mut context: TodoContext<'_>) -> Todo {
    let todo = context.todo_mut();
    todo.done = true;
    todo.clone()
}

pub fn delete_todo(context: TodoContext<'_>) -> ApiResult<()> {
    let id = context.todo().id;
    let todos = &mut context.user.todos;

    match todos.iter().position(|todo| todo.id == id) {
        Some(index) => {
            todos.remove(index);
            info!(%id, username = %context.user.username, "todo deleted");
            Ok(())
        }
        None => Err(ApiError::TodoNotFound),
    }
}
