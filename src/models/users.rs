use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::Record;

#[derive(Clone, Debug)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    fn id(&self) -> u64 {
        self.id
    }
}

/// What callers get to see of a [`User`].
#[derive(Clone, Debug, Serialize)]
pub struct PublicUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}
