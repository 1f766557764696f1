//! Request preconditions.
//!
//! Each guard either rejects with an [`ApiError`] or hands back a context
//! value carrying the entities it resolved. Operations in
//! [`crate::operation`] accept only these contexts, so a handler cannot reach
//! an operation without running its guards first.

use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    model::{Todo, User},
    store::UserStore,
    validate::is_valid_uuid,
};

/// Free plan users may hold at most this many to-dos.
pub const FREE_PLAN_TODO_LIMIT: usize = 10;

/// A user resolved from the store.
#[derive(Debug)]
pub struct UserContext<'a> {
    pub(crate) user: &'a mut User,
}

#[cfg(test)]
impl UserContext<'_> {
    fn user(&self) -> &User {
        self.user
    }
}

/// A user that is allowed to create one more to-do.
#[derive(Debug)]
pub struct QuotaContext<'a> {
    pub(crate) user: &'a mut User,
}

/// A user together with one of their own to-dos.
#[derive(Debug)]
pub struct TodoContext<'a> {
    pub(crate) user: &'a mut User,
    pub(crate) index: usize,
}

impl TodoContext<'_> {
    #[cfg(test)]
    fn user(&self) -> &User {
        self.user
    }

    pub fn todo(&self) -> &Todo {
        &self.user.todos[self.index]
    }

    pub(crate) fn todo_mut(&mut self) -> &mut Todo {
        &mut self.user.todos[self.index]
    }
}

/// Resolves the account named by the `username` header.
pub fn user_by_username<'a>(store: &'a mut UserStore, username: &str) -> ApiResult<UserContext<'a>> {
    match store.find_by_username_mut(username) {
        Some(user) => Ok(UserContext { user }),
        None => {
            debug!(username, "no account for username");
            Err(ApiError::UserNotFound)
        }
    }
}

/// Pro users pass unconditionally; free users pass while under the limit.
pub fn check_quota(context: UserContext<'_>) -> ApiResult<QuotaContext<'_>> {
    let user = context.user;
    if user.pro || user.todos.len() < FREE_PLAN_TODO_LIMIT {
        return Ok(QuotaContext { user });
    }

    debug!(username = %user.username, todos = user.todos.len(), "free plan quota reached");
    Err(ApiError::QuotaExceeded)
}

/// Resolves a to-do through its owner's list only. A valid id belonging to
/// someone else is reported exactly like a missing one.
pub fn todo_exists<'a>(
    store: &'a mut UserStore,
    username: &str,
    id: &str,
) -> ApiResult<TodoContext<'a>> {
    let UserContext { user } = user_by_username(store, username)?;

    if !is_valid_uuid(id) {
        debug!(id, "malformed todo id");
        return Err(ApiError::InvalidTodoId);
    }

    match user.position_of_todo(id) {
        Some(index) => Ok(TodoContext { user, index }),
        None => {
            debug!(username = %user.username, id, "todo not in user's list");
            Err(ApiError::TodoNotOwned)
        }
    }
}

/// Resolves a user by the id in the route path. The id is not format checked.
pub fn user_by_id<'a>(store: &'a mut UserStore, id: &str) -> ApiResult<UserContext<'a>> {
    match store.find_by_id_mut(id) {
        Some(user) => Ok(UserContext { user }),
        None => {
            debug!(id, "no account for id");
            Err(ApiError::UserNotFound)
        }
    }
}
