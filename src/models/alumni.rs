use super::EntityKind;
use crate::utils::coerce;
use serde::{Deserialize, Serialize};

/// Alumni accounts, collection `alumnis`
pub struct Alumni;

impl EntityKind for Alumni {
    type Info = AlumniInfo;

    const COLLECTION: &'static str = "alumnis";
    const LABEL: &'static str = "Alumni";
    const NOUN: &'static str = "alumni";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlumniInfo {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub batch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub current_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::boolean")]
    pub terms_accepted: Option<bool>,
}
