//! Alumni routes, including the public `/api/alumni` directory listing.

use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::{accounts, JsonBody};
use crate::{
    models::{Alumni, AlumniInfo, LoginRequest, RegisterRequest},
    state::AppState,
    utils::AppError,
};

#[utoipa::path(
    post,
    path = "/register/alumnilist",
    tag = "Alumni",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Alumni registered"),
        (status = 400, description = "Body could not be stored")
    )
)]
pub async fn register(
    state: web::Data<AppState>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /register/alumnilist");
    accounts::register::<Alumni>(&state, body.into_inner()).await
}

/// Body is `{ "addInfo": { ... } }`; the stored profile is replaced, not merged.
#[utoipa::path(
    put,
    path = "/update/alumni/{id}",
    tag = "Alumni",
    params(("id" = String, Path, description = "Account ObjectId: 24 hex characters or a 12-byte string")),
    responses(
        (status = 200, description = "Profile replaced, post-update document returned"),
        (status = 400, description = "Invalid user ID or invalid addInfo"),
        (status = 404, description = "Alumni not found")
    )
)]
pub async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /update/alumni/{}", path);
    accounts::update_profile::<Alumni>(&state, &path, body.into_inner()).await
}

#[utoipa::path(
    post,
    path = "/update/alumni/{id}",
    tag = "Alumni",
    params(("id" = String, Path, description = "Account ObjectId: 24 hex characters or a 12-byte string")),
    request_body = AlumniInfo,
    responses(
        (status = 200, description = "Profile replaced, post-update document returned"),
        (status = 400, description = "Invalid user ID or invalid profile"),
        (status = 404, description = "Alumni not found")
    )
)]
pub async fn replace_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 POST /update/alumni/{}", path);
    accounts::replace_profile::<Alumni>(&state, &path, body.into_inner()).await
}

#[utoipa::path(
    post,
    path = "/login-alumnilist",
    tag = "Alumni",
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
    log::info!("🔐 POST /login-alumnilist");
    accounts::login::<Alumni>(&state, &request.into_inner()).await
}

#[utoipa::path(
    get,
    path = "/api/alumni",
    tag = "Alumni",
    responses(
        (status = 200, description = "Every alumni document"),
        (status = 500, description = "Store error")
    )
)]
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /api/alumni");
    accounts::list::<Alumni>(&state).await
}
