use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::{accounts, JsonBody};
use crate::{
    models::{Student, StudentInfo, LoginRequest, RegisterRequest},
    state::AppState,
    utils::AppError,
};

#[utoipa::path(
    post,
    path = "/register/students",
    tag = "Students",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Student registered"),
        (status = 400, description = "Body could not be stored")
    )
)]
pub async fn register(
    state: web::Data<AppState>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /register/students");
    accounts::register::<Student>(&state, body.into_inner()).await
}

/// Body is `{ "addInfo": { ... } }`; the stored profile is replaced, not merged.
#[utoipa::path(
    put,
    path = "/update/student/{id}",
    tag = "Students",
    params(("id" = String, Path, description = "Account ObjectId: 24 hex characters or a 12-byte string")),
    responses(
        (status = 200, description = "Profile replaced, post-update document returned"),
        (status = 400, description = "Invalid user ID or invalid addInfo"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PUT /update/student/{}", path);
    accounts::update_profile::<Student>(&state, &path, body.into_inner()).await
}

#[utoipa::path(
    post,
    path = "/update/student/{id}",
    tag = "Students",
    params(("id" = String, Path, description = "Account ObjectId: 24 hex characters or a 12-byte string")),
    request_body = StudentInfo,
    responses(
        (status = 200, description = "Profile replaced, post-update document returned"),
        (status = 400, description = "Invalid user ID or invalid profile"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn replace_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: JsonBody<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 POST /update/student/{}", path);
    accounts::replace_profile::<Student>(&state, &path, body.into_inner()).await
}

#[utoipa::path(
    post,
    path = "/login-students",
    tag = "Students",
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
    log::info!("🔐 POST /login-students");
    accounts::login::<Student>(&state, &request.into_inner()).await
}
