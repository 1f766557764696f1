use crate::model::User;

/// Ordered, in-memory collection of every registered user.
///
/// Users are only ever appended. Callers share one store behind a single lock
/// (see [`crate::AppState`]) so a guard and the operation that follows it see
/// the same snapshot.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub(crate) fn push(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn contains_username(&self, username: &str) -> bool {
        self.users.iter().any(|user| user.username == username)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.username == username)
    }

    // Path ids are compared verbatim, never parsed.
    pub fn find_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id.to_string() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id.to_string() == id)
    }
}
