use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::error::ApiError;

pub const USERNAME_HEADER: &str = "username";

/// The caller's claimed identity, read from the `username` header.
///
/// The claim is trusted as-is. A missing or non-UTF-8 header can never match
/// an account, so it is rejected the same way an unknown username is.
#[derive(Debug, Clone)]
pub struct Username(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Username
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let username = parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|header| header.to_str().ok());

        match username {
            Some(username) => Ok(Username(username.to_string())),
            None => {
                tracing::debug!("username header missing");
                Err(ApiError::UserNotFound)
            }
        }
    }
}
