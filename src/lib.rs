use tokio::sync::Mutex;

use crate::store::UserStore;

pub mod config;
pub mod error;
pub mod guard;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod operation;
pub mod route;
pub mod schema;
pub mod store;
pub mod validate;

// Struct representing the application state
//
// One lock guards the whole store; handlers hold it across their guards and
// the operation that follows.
#[derive(Debug, Default)]
pub struct AppState {
    pub store: Mutex<UserStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
