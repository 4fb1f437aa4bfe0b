use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
    pub role: Option<Value>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}
