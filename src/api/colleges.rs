//! College accounts. Colleges are never listed, only registered, updated and logged into.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::{accounts, JsonBody};
use crate::{
    models::{College, CollegeInfo, LoginRequest, RegisterRequest},
    state::AppState,
    utils::AppError,
};

#[utoipa::path(
    post,
    path = "/register/colleges",
    tag = "Colleges",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "College registered"),
        (status = 400, description = "Body could not be stored")
    )
)]
pub async fn register(
    state: web::Data<AppState>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /register/colleges");
    accounts::register::<College>(&state, body.into_inner()).await
}

/// Body is `{ "addInfo": { ... } }`; the stored profile is replaced, not merged.
#[utoipa::path(
    put,
    path = "/update/college/{id}",
    tag = "Colleges",
    params(("id" = String, Path, description = "Account ObjectId: 24 hex characters or a 12-byte string")),
    responses(
        (status = 200, description = "Profile replaced, post-update document returned"),
        (status = 400, description = "Invalid user ID or invalid addInfo"),
        (status = 404, description = "College not found")
    )
)]
pub async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /update/college/{}", path);
    accounts::update_profile::<College>(&state, &path, body.into_inner()).await
}

#[utoipa::path(
    post,
    path = "/update/college/{id}",
    tag = "Colleges",
    params(("id" = String, Path, description = "Account ObjectId: 24 hex characters or a 12-byte string")),
    request_body = CollegeInfo,
    responses(
        (status = 200, description = "Profile replaced, post-update document returned"),
        (status = 400, description = "Invalid user ID or invalid profile"),
        (status = 404, description = "College not found")
    )
)]
pub async fn replace_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 POST /update/college/{}", path);
    accounts::replace_profile::<College>(&state, &path, body.into_inner()).await
}

#[utoipa::path(
    post,
    path = "/login-colleges",
    tag = "Colleges",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, full document returned"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Store error")
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    request: JsonBody<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔐 POST /login-colleges");
    accounts::login::<College>(&state, &request.into_inner()).await
}
