pub mod accounts;
pub mod alumni;
pub mod colleges;
pub mod health;
pub mod students;
pub mod swagger;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::utils::AppError;

/// JSON request body, parsed whatever the content type.
///
/// An empty payload reads as `{}`. Malformed JSON answers 400 in the API's
/// error shape.
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for JsonBody<T> {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let target = format!("{} {}", req.method(), req.path());
        let bytes = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let rejected = |details: String| {
                log::warn!("❌ Rejected body for {}: {}", target, details);
                AppError::invalid_with("Invalid JSON body", details)
            };

            let bytes = bytes.await.map_err(|e| rejected(e.to_string()))?;

            let parsed: Result<T, serde_json::Error> = if bytes.iter().all(u8::is_ascii_whitespace) {
                serde_json::from_value(Value::Object(Map::new()))
            } else {
                serde_json::from_slice(&bytes)
            };

            parsed.map(JsonBody).map_err(|e| rejected(e.to_string()))
        })
    }
}

/// Every account route plus the health check.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Registration
        .route("/register/alumnilist", web::post().to(alumni::register))
        .route("/register/colleges", web::post().to(colleges::register))
        .route("/register/students", web::post().to(students::register))
        // Profile updates: PUT nests the profile under addInfo, POST sends it bare
        .service(
            web::resource("/update/alumni/{id}")
                .route(web::put().to(alumni::update_profile))
                .route(web::post().to(alumni::replace_profile)),
        )
        .service(
            web::resource("/update/college/{id}")
                .route(web::put().to(colleges::update_profile))
                .route(web::post().to(colleges::replace_profile)),
        )
        .service(
            web::resource("/update/student/{id}")
                .route(web::put().to(students::update_profile))
                .route(web::post().to(students::replace_profile)),
        )
        // Login
        .route("/login-alumnilist", web::post().to(alumni::login))
        .route("/login-colleges", web::post().to(colleges::login))
        .route("/login-students", web::post().to(students::login))
        // Listing
        .route("/api/alumni", web::get().to(alumni::list));
}
