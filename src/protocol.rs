use serde::Serialize;

use crate::models::users::PublicUser;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new<S: ToString>(error: S) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Body of successful `register` and `login` calls.
#[derive(Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub user: PublicUser,
}
