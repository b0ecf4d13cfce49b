use crate::utils::coerce;
use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt::Debug;

/// One of the three account collections.
///
/// The kinds share the same document shape and differ only in the
/// `addInfo` profile they carry.
pub trait EntityKind: Send + Sync + 'static {
    type Info: Serialize + DeserializeOwned + Clone + Debug + Send + Sync;

    /// MongoDB collection name
    const COLLECTION: &'static str;
    /// Capitalised name used in messages ("Alumni registered successfully")
    const LABEL: &'static str;
    /// Lowercase name, also the response key on login
    const NOUN: &'static str;

    /// Response key for the post-update document, e.g. `updatedAlumni`.
    fn updated_key() -> String {
        format!("updated{}", Self::LABEL)
    }
}

/// Account document as written by registration
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Account {
    /// New account as created by registration; `addInfo` stays unset.
    pub fn new(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// Account document exactly as read back from the store.
///
/// Only writes are typed. Stored documents are rendered field for field,
/// so legacy or hand-edited rows still list and log in.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAccount(Document);

impl StoredAccount {
    /// Scalar field in its string form, the way a string-typed schema reads it.
    pub fn string_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Bson::String(s) => Some(s.clone()),
            Bson::Int32(n) => Some(n.to_string()),
            Bson::Int64(n) => Some(n.to_string()),
            Bson::Double(n) => Some(coerce::float_string(*n)),
            Bson::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Plaintext comparison, mirroring how the accounts were always checked.
    pub fn password_matches(&self, password: &str) -> bool {
        self.string_field("password").as_deref() == Some(password)
    }

    /// JSON rendering with ObjectIds as hex strings and dates as ISO 8601 in UTC.
    pub fn to_json(&self) -> Value {
        plain_json(Bson::Document(self.0.clone()))
    }
}

impl From<Document> for StoredAccount {
    fn from(document: Document) -> Self {
        Self(document)
    }
}

impl Serialize for StoredAccount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn plain_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::DateTime(at) => match chrono::DateTime::from_timestamp_millis(at.timestamp_millis()) {
            Some(utc) => Value::String(utc.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => Bson::DateTime(at).into_relaxed_extjson(),
        },
        Bson::Document(document) => Value::Object(
            document
                .into_iter()
                .map(|(key, value)| (key, plain_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(plain_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

// ==================== REQUESTS ====================

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "coerce::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "coerce::string")]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Matched against the stored `email` only
    #[serde(rename = "emailOrPhone", default, deserialize_with = "coerce::string")]
    pub email_or_phone: Option<String>,
    #[serde(default, deserialize_with = "coerce::string")]
    pub password: Option<String>,
}

/// Body of `PUT /update/{kind}/{id}`.
///
/// `add_info` is `None` when the key is missing and `Some(None)` when the
/// client sent `"addInfo": null`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "I: Deserialize<'de>"))]
pub struct UpdateProfileRequest<I> {
    #[serde(rename = "addInfo", default, deserialize_with = "present")]
    pub add_info: Option<Option<I>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
