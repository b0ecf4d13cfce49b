// ==================== ACCOUNT OPERATIONS ====================
// Registration, profile replacement, login and listing for every account
// kind. Each operation is one store call; errors already carry the status
// and message their route answers with.

use crate::{
    database::DocumentStore,
    models::{Account, EntityKind, LoginRequest, RegisterRequest, StoredAccount, UpdateProfileRequest},
    utils::AppError,
};
use mongodb::bson::{self, oid::ObjectId, Bson};
use serde_json::Value;

const PROFILE_FIELD: &str = "addInfo";

fn register_error<K: EntityKind>(details: impl Into<String>) -> AppError {
    AppError::invalid_with(format!("Error registering {}", K::NOUN), details)
}

fn update_error<K: EntityKind>(details: impl Into<String>) -> AppError {
    AppError::invalid_with(format!("Error updating {} profile", K::NOUN), details)
}

/// Path ids are 24-hex ObjectIds, or any 12-byte string taken as the raw id bytes.
pub fn parse_user_id(raw: &str) -> Result<ObjectId, AppError> {
    if let Ok(bytes) = <[u8; 12]>::try_from(raw.as_bytes()) {
        return Ok(ObjectId::from_bytes(bytes));
    }

    ObjectId::parse_str(raw).map_err(|_| AppError::invalid("Invalid user ID"))
}

/// Profile carried under the `addInfo` key of a PUT body.
pub fn profile_from_update_request<K: EntityKind>(body: Value) -> Result<Option<K::Info>, AppError> {
    let request: UpdateProfileRequest<K::Info> =
        serde_json::from_value(body).map_err(|e| update_error::<K>(e.to_string()))?;

    request
        .add_info
        .ok_or_else(|| update_error::<K>("addInfo is required"))
}

/// Profile sent as the whole request body (POST variant).
pub fn profile_from_body<K: EntityKind>(body: Value) -> Result<Option<K::Info>, AppError> {
    serde_json::from_value(body).map_err(|e| update_error::<K>(e.to_string()))
}

/// Inserts a new account with name, email and password only.
pub async fn register<K: EntityKind>(
    store: &dyn DocumentStore,
    body: Value,
) -> Result<ObjectId, AppError> {
    let request: RegisterRequest =
        serde_json::from_value(body).map_err(|e| register_error::<K>(e.to_string()))?;

    let account = Account::new(request);
    let document = bson::to_document(&account).map_err(|e| register_error::<K>(e.to_string()))?;

    store
        .insert(K::COLLECTION, document)
        .await
        .map_err(|e| register_error::<K>(e.details()))
}

/// Replaces `addInfo` wholesale and returns the account after the update.
///
/// `None` clears the profile.
pub async fn replace_profile<K: EntityKind>(
    store: &dyn DocumentStore,
    id: ObjectId,
    profile: Option<K::Info>,
) -> Result<StoredAccount, AppError> {
    let value = match &profile {
        Some(info) => bson::to_bson(info).map_err(|e| update_error::<K>(e.to_string()))?,
        None => Bson::Null,
    };

    store
        .set_field(K::COLLECTION, id, PROFILE_FIELD, value)
        .await
        .map_err(|e| update_error::<K>(e.details()))?
        .map(StoredAccount::from)
        .ok_or_else(|| AppError::NotFound(format!("{} not found", K::LABEL)))
}

/// First account registered with `emailOrPhone` as its email, if the
/// plaintext password matches.
pub async fn login<K: EntityKind>(
    store: &dyn DocumentStore,
    request: &LoginRequest,
) -> Result<StoredAccount, AppError> {
    let (Some(email), Some(password)) = (&request.email_or_phone, &request.password) else {
        return Err(AppError::InvalidCredentials);
    };

    let account = store
        .find_first(K::COLLECTION, "email", email)
        .await
        .map_err(|e| AppError::ServerError(e.details()))?
        .map(StoredAccount::from)
        .ok_or(AppError::InvalidCredentials)?;

    if !account.password_matches(password) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(account)
}

/// Every stored account of kind `K`, untouched by the profile schema.
pub async fn list_all<K: EntityKind>(store: &dyn DocumentStore) -> Result<Vec<StoredAccount>, AppError> {
    let documents = store
        .find_all(K::COLLECTION)
        .await
        .map_err(|e| AppError::FetchFailed {
            error: format!("Error fetching {} data", K::NOUN),
            details: e.details(),
        })?;

    Ok(documents.into_iter().map(StoredAccount::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::models::{Alumni, AlumniInfo, College, CollegeInfo, Student};
    use mongodb::bson::doc;
    use serde_json::json;

    fn credentials(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email_or_phone: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_parse_user_id() {
        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("64b7f0c2a1b2c3d4e5f6071z").is_err());
        assert!(parse_user_id("64b7f0c2a1b2c3d4e5f60718").is_ok());
    }

    #[test]
    fn test_parse_user_id_accepts_twelve_byte_strings() {
        let id = parse_user_id("aaaaaaaaaaaa").unwrap();
        assert_eq!(id.bytes(), *b"aaaaaaaaaaaa");
        assert_eq!(id.to_hex(), "616161616161616161616161");
    }

    #[test]
    fn test_update_request_requires_add_info_key() {
        let err = profile_from_update_request::<Alumni>(json!({ "branch": "CSE" })).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest { .. }));

        let profile = profile_from_update_request::<Alumni>(json!({ "addInfo": null })).unwrap();
        assert!(profile.is_none());
    }

    #[test]
    fn test_profile_cast_failure_is_invalid_request() {
        let err = profile_from_body::<College>(json!({ "collegeCode": { "$gt": "" } })).unwrap_err();
        match err {
            AppError::InvalidRequest { error, details } => {
                assert_eq!(error, "Error updating college profile");
                assert!(details.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let store = MemoryStore::new();
        register::<Student>(&store, json!({ "name": "A", "email": "a@x.com", "password": "p" }))
            .await
            .unwrap();

        let account = login::<Student>(&store, &credentials("a@x.com", "p")).await.unwrap();
        assert_eq!(account.string_field("name").as_deref(), Some("A"));
        assert!(account.to_json().get("addInfo").is_none());

        let err = login::<Student>(&store, &credentials("a@x.com", "wrong")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_is_scoped_to_its_collection() {
        let store = MemoryStore::new();
        register::<Alumni>(&store, json!({ "email": "a@x.com", "password": "p" }))
            .await
            .unwrap();

        let err = login::<College>(&store, &credentials("a@x.com", "p")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_without_password_never_matches() {
        let store = MemoryStore::new();
        register::<Alumni>(&store, json!({ "email": "a@x.com" })).await.unwrap();

        let request = LoginRequest {
            email_or_phone: Some("a@x.com".to_string()),
            password: None,
        };
        let err = login::<Alumni>(&store, &request).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_duplicate_emails_login_against_first_match() {
        let store = MemoryStore::new();
        register::<Alumni>(&store, json!({ "name": "first", "email": "d@x.com", "password": "one" }))
            .await
            .unwrap();
        register::<Alumni>(&store, json!({ "name": "second", "email": "d@x.com", "password": "two" }))
            .await
            .unwrap();

        let account = login::<Alumni>(&store, &credentials("d@x.com", "one")).await.unwrap();
        assert_eq!(account.string_field("name").as_deref(), Some("first"));
        assert!(login::<Alumni>(&store, &credentials("d@x.com", "two")).await.is_err());
    }

    #[tokio::test]
    async fn test_replace_profile_is_full_replace() {
        let store = MemoryStore::new();
        let id = register::<Alumni>(&store, json!({ "email": "r@x.com" })).await.unwrap();

        let first = AlumniInfo {
            first_name: Some("Ada".into()),
            branch: Some("CSE".into()),
            ..AlumniInfo::default()
        };
        replace_profile::<Alumni>(&store, id, Some(first)).await.unwrap();

        let second = AlumniInfo {
            current_company: Some("Acme".into()),
            ..AlumniInfo::default()
        };
        let account = replace_profile::<Alumni>(&store, id, Some(second)).await.unwrap();
        assert_eq!(account.to_json()["addInfo"], json!({ "currentCompany": "Acme" }));
    }

    #[tokio::test]
    async fn test_replace_profile_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = replace_profile::<College>(&store, ObjectId::new(), Some(CollegeInfo::default()))
            .await
            .unwrap_err();

        match err {
            AppError::NotFound(msg) => assert_eq!(msg, "College not found"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_documents_outside_the_schema_are_still_read() {
        let store = MemoryStore::new();
        store
            .insert("alumnis", doc! { "name": "ok", "email": "ok@x.com", "__v": 0 })
            .await
            .unwrap();
        store
            .insert(
                "alumnis",
                doc! {
                    "email": "legacy@x.com",
                    "password": 1234,
                    "addInfo": { "termsAccepted": "maybe" },
                },
            )
            .await
            .unwrap();

        let accounts = list_all::<Alumni>(&store).await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].to_json()["__v"], 0);
        assert_eq!(accounts[1].to_json()["addInfo"]["termsAccepted"], "maybe");

        let account = login::<Alumni>(&store, &credentials("legacy@x.com", "1234")).await.unwrap();
        assert_eq!(account.string_field("email").as_deref(), Some("legacy@x.com"));
    }

    #[tokio::test]
    async fn test_store_failures_map_per_operation() {
        let store = MemoryStore::unavailable();

        let err = register::<Alumni>(&store, json!({ "email": "x" })).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest { .. }));

        let err = login::<Alumni>(&store, &credentials("x", "y")).await.unwrap_err();
        assert!(matches!(err, AppError::ServerError(_)));

        let err = list_all::<Alumni>(&store).await.unwrap_err();
        assert!(matches!(err, AppError::FetchFailed { .. }));
    }
}
