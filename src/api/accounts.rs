//! Response shaping shared by the alumni, college and student routes.

use actix_web::HttpResponse;
use serde_json::{json, Map, Value};

use crate::{
    models::{EntityKind, LoginRequest},
    services::account_service,
    state::AppState,
    utils::AppError,
};

pub async fn register<K: EntityKind>(state: &AppState, body: Value) -> Result<HttpResponse, AppError> {
    match account_service::register::<K>(state.store(), body).await {
        Ok(id) => {
            log::info!("✅ {} registered: {}", K::LABEL, id);
            Ok(HttpResponse::Created().json(json!({
                "message": format!("{} registered successfully", K::LABEL)
            })))
        }
        Err(e) => {
            log::error!("❌ Error saving {}: {}", K::NOUN, e);
            Err(e)
        }
    }
}

/// `PUT /update/{kind}/{id}`: profile nested under `addInfo`.
pub async fn update_profile<K: EntityKind>(
    state: &AppState,
    raw_id: &str,
    body: Value,
) -> Result<HttpResponse, AppError> {
    let id = account_service::parse_user_id(raw_id)?;
    let profile = account_service::profile_from_update_request::<K>(body)?;
    save_profile::<K>(state, id, profile).await
}

/// `POST /update/{kind}/{id}`: the whole body is the profile.
pub async fn replace_profile<K: EntityKind>(
    state: &AppState,
    raw_id: &str,
    body: Value,
) -> Result<HttpResponse, AppError> {
    let id = account_service::parse_user_id(raw_id)?;
    let profile = account_service::profile_from_body::<K>(body)?;
    save_profile::<K>(state, id, profile).await
}

async fn save_profile<K: EntityKind>(
    state: &AppState,
    id: mongodb::bson::oid::ObjectId,
    profile: Option<K::Info>,
) -> Result<HttpResponse, AppError> {
    let account = match account_service::replace_profile::<K>(state.store(), id, profile).await {
        Ok(account) => account,
        Err(e) => {
            log::warn!("❌ Error updating {} profile {}: {}", K::NOUN, id, e);
            return Err(e);
        }
    };

    log::info!("✅ {} profile updated: {}", K::LABEL, id);

    let mut body = Map::new();
    body.insert(
        "message".to_string(),
        json!(format!("{} profile updated successfully", K::LABEL)),
    );
    body.insert(K::updated_key(), account.to_json());

    Ok(HttpResponse::Ok().json(Value::Object(body)))
}

pub async fn login<K: EntityKind>(
    state: &AppState,
    request: &LoginRequest,
) -> Result<HttpResponse, AppError> {
    let email = request.email_or_phone.as_deref().unwrap_or("N/A");

    let account = match account_service::login::<K>(state.store(), request).await {
        Ok(account) => account,
        Err(e) => {
            log::warn!("❌ {} login failed: {} - {}", K::LABEL, email, e);
            return Err(e);
        }
    };

    log::info!("✅ {} login successful: {}", K::LABEL, email);

    let mut body = Map::new();
    body.insert("message".to_string(), json!("Login successful"));
    body.insert(K::NOUN.to_string(), account.to_json());

    Ok(HttpResponse::Ok().json(Value::Object(body)))
}

pub async fn list<K: EntityKind>(state: &AppState) -> Result<HttpResponse, AppError> {
    let accounts = match account_service::list_all::<K>(state.store()).await {
        Ok(accounts) => accounts,
        Err(e) => {
            log::error!("❌ Error fetching {} data: {}", K::NOUN, e);
            return Err(e);
        }
    };

    log::info!("✅ Listed {} {} accounts", accounts.len(), K::NOUN);

    Ok(HttpResponse::Ok().json(accounts))
}
