use super::EntityKind;
use crate::utils::coerce;
use serde::{Deserialize, Serialize};

/// College accounts, collection `colleges`
pub struct College;

impl EntityKind for College {
    type Info = CollegeInfo;

    const COLLECTION: &'static str = "colleges";
    const LABEL: &'static str = "College";
    const NOUN: &'static str = "college";
}

/// Every college field is free text, including the year and alumni count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollegeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub college_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub establishing_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub college_director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub courses_available: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub num_of_alumni: Option<String>,
}
