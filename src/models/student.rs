use super::EntityKind;
use crate::utils::coerce;
use serde::{Deserialize, Serialize};

/// Student accounts, collection `students`
pub struct Student;

impl EntityKind for Student {
    type Info = StudentInfo;

    const COLLECTION: &'static str = "students";
    const LABEL: &'static str = "Student";
    const NOUN: &'static str = "student";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub current_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub batch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::string")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "coerce::boolean")]
    pub terms_checkbox: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_dropped() {
        let info: StudentInfo = serde_json::from_value(json!({
            "firstName": "Ravi",
            "currentYear": 3,
            "termsCheckbox": "true",
            "favouriteColour": "green"
        }))
        .unwrap();

        assert_eq!(info.current_year.as_deref(), Some("3"));
        assert_eq!(info.terms_checkbox, Some(true));

        let stored = serde_json::to_value(&info).unwrap();
        assert_eq!(
            stored,
            json!({ "firstName": "Ravi", "currentYear": "3", "termsCheckbox": true })
        );
    }
}
