use chrono::{DateTime, Utc};
use uuid::Uuid;

// Account registered through POST /users
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub pro: bool,
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(name: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            username,
            pro: false,
            todos: Vec::new(),
        }
    }

    pub(crate) fn position_of_todo(&self, id: &str) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id.to_string() == id)
    }
}

// Data model representing a Todo item, owned by exactly one User
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub deadline: Option<DateTime<Utc>>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(title: String, deadline: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            deadline,
            done: false,
            created_at: Utc::now(),
        }
    }
}
