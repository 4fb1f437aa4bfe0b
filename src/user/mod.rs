mod requests;
mod utils;

use crate::{
    error::{
        ApiError, ApiResult, MSG_BAD_CREDENTIALS, MSG_EMAIL_TAKEN, MSG_FIELDS_REQUIRED,
        MSG_LOGIN_FIELDS_REQUIRED,
    },
    models::users::{PublicUser, User},
    protocol::UserResponse,
    state::AppState,
    utils::required,
};
use actix_web::{post, web, HttpResponse};
use chrono::Utc;

use self::{
    requests::{LoginRequest, RegisterRequest},
    utils::{hash_password, new_salt, verify_password},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}

crate::api_funcs! {
    (post, register, "/register", info: web::Json<RegisterRequest>),
    (post, login, "/login", info: web::Json<LoginRequest>),
}

fn register_impl(state: &AppState, info: web::Json<RegisterRequest>) -> ApiResult<HttpResponse> {
    let info = info.into_inner();

    let name = required(info.name, MSG_FIELDS_REQUIRED)?;
    let email = required(info.email, MSG_FIELDS_REQUIRED)?;
    let password = required(info.password, MSG_FIELDS_REQUIRED)?;
    let role = required(info.role, MSG_FIELDS_REQUIRED)?;

    let salt = new_salt();
    let password_hash = hash_password(&salt, &password);
    let taken = |user: &User| user.email == email;
    let user = state
        .users
        .append_unless(
            &taken,
            Box::new(|id| User {
                id,
                name,
                email: email.clone(),
                password_salt: salt,
                password_hash,
                role,
                created_at: Utc::now(),
            }),
        )?
        .ok_or(ApiError::Conflict(MSG_EMAIL_TAKEN))?;

    tracing::info!(id = user.id, role = %user.role, "user registered");

    Ok(HttpResponse::Created().json(UserResponse {
        message: "Inscription réussie",
        user: PublicUser::from(user),
    }))
}

fn login_impl(state: &AppState, info: web::Json<LoginRequest>) -> ApiResult<HttpResponse> {
    let info = info.into_inner();

    let email = required(info.email, MSG_LOGIN_FIELDS_REQUIRED)?;
    let password = required(info.password, MSG_LOGIN_FIELDS_REQUIRED)?;

    // unknown email and wrong password are indistinguishable to the caller
    let user = state
        .users
        .find(&|user: &User| user.email == email)?
        .filter(|user| verify_password(user, &password))
        .ok_or(ApiError::Auth(MSG_BAD_CREDENTIALS))?;

    tracing::info!(id = user.id, "user logged in");

    Ok(HttpResponse::Ok().json(UserResponse {
        message: "Connexion réussie",
        user: PublicUser::from(user),
    }))
}
