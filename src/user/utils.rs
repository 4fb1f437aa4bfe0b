use blake2::{Blake2b, Digest};
use uuid::Uuid;

use crate::models::users::User;

pub fn new_salt() -> String {
    Uuid::new_v4().to_simple().to_string()
}

pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Blake2b::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn verify_password(user: &User, password: &str) -> bool {
    hash_password(&user.password_salt, password) == user.password_hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with(password: &str) -> User {
        let salt = new_salt();
        User {
            id: 1,
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            password_hash: hash_password(&salt, password),
            password_salt: salt,
            role: "patient".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn hash_is_salted() {
        let a = hash_password(&new_salt(), "secret");
        let b = hash_password(&new_salt(), "secret");
        assert_ne!(a, b);
        assert_ne!(a, "secret");
        // blake2b-512, hex encoded
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn verify() {
        let user = user_with("secret");
        assert!(verify_password(&user, "secret"));
        assert!(!verify_password(&user, "Secret"));
        assert!(!verify_password(&user, ""));
    }
}
