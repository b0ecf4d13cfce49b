//! Lenient field deserializers for profile documents.
//!
//! Clients send loosely typed JSON (`"establishingYear": 1998`,
//! `"termsAccepted": "true"`). String fields accept any scalar and store its
//! string form; boolean fields accept exactly `true`/`false`, `"true"`/`"false"`,
//! `"yes"`/`"no"`, `"1"`/`"0"` and `1`/`0`. Spelling is case-sensitive.
//! Objects and arrays are rejected so the caller can answer with a 400.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::fmt;

/// `#[serde(default, deserialize_with = "coerce::string")]`
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringVisitor)
}

/// `#[serde(default, deserialize_with = "coerce::boolean")]`
pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(BoolVisitor)
}

/// String form of a number: 1998.0 becomes "1998", 2.5 stays "2.5".
pub fn float_string(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        (v as i64).to_string()
    } else {
        v.to_string()
    }
}

struct StringVisitor;

impl<'de> Visitor<'de> for StringVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(float_string(v)))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = Option<bool>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean, \"true\"/\"false\", \"yes\"/\"no\" or 1/0")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match v {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match v {
            1 => Ok(Some(true)),
            0 => Ok(Some(false)),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match v {
            1 => Ok(Some(true)),
            0 => Ok(Some(false)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v == 1.0 {
            Ok(Some(true))
        } else if v == 0.0 {
            Ok(Some(false))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "boolean")]
        flag: Option<bool>,
    }

    fn parse(value: serde_json::Value) -> Result<Fields, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_scalars_are_stringified() {
        assert_eq!(parse(json!({ "text": "CSE" })).unwrap().text.as_deref(), Some("CSE"));
        assert_eq!(parse(json!({ "text": 1998 })).unwrap().text.as_deref(), Some("1998"));
        assert_eq!(parse(json!({ "text": 2.5 })).unwrap().text.as_deref(), Some("2.5"));
        assert_eq!(parse(json!({ "text": true })).unwrap().text.as_deref(), Some("true"));
    }

    #[test]
    fn test_missing_and_null_are_none() {
        let p = parse(json!({})).unwrap();
        assert!(p.text.is_none());
        assert!(p.flag.is_none());

        let p = parse(json!({ "text": null, "flag": null })).unwrap();
        assert!(p.text.is_none());
        assert!(p.flag.is_none());
    }

    #[test]
    fn test_boolean_spellings() {
        assert_eq!(parse(json!({ "flag": true })).unwrap().flag, Some(true));
        assert_eq!(parse(json!({ "flag": "yes" })).unwrap().flag, Some(true));
        assert_eq!(parse(json!({ "flag": "false" })).unwrap().flag, Some(false));
        assert_eq!(parse(json!({ "flag": "0" })).unwrap().flag, Some(false));
        assert_eq!(parse(json!({ "flag": 0 })).unwrap().flag, Some(false));
    }

    #[test]
    fn test_boolean_spellings_are_exact() {
        assert!(parse(json!({ "flag": "TRUE" })).is_err());
        assert!(parse(json!({ "flag": "Yes" })).is_err());
        assert!(parse(json!({ "flag": " yes " })).is_err());
        assert!(parse(json!({ "flag": "False" })).is_err());
    }

    #[test]
    fn test_rejects_non_scalars() {
        assert!(parse(json!({ "text": { "nested": 1 } })).is_err());
        assert!(parse(json!({ "text": ["a"] })).is_err());
        assert!(parse(json!({ "flag": "maybe" })).is_err());
        assert!(parse(json!({ "flag": 2 })).is_err());
    }
}
