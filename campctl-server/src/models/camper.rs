//! Camper validation
//!
//! A camper needs a non-empty name and an age between 8 and 18.

use serde_json::{Map, Value};

use super::validation::in_range;
use super::ValidationError;

/// Youngest accepted camper age
pub const MIN_AGE: i64 = 8;

/// Oldest accepted camper age
pub const MAX_AGE: i64 = 18;

/// Validated camper name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamperName(String);

impl CamperName {
    /// Create a camper name.
    ///
    /// Only the empty string is rejected; whitespace is kept as given.
    ///
    /// # Example
    /// ```
    /// use campctl_server::models::CamperName;
    ///
    /// assert!(CamperName::new("Alex").is_ok());
    /// assert!(CamperName::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated camper age (8..=18)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CamperAge(i64);

impl CamperAge {
    pub fn new(age: i64) -> Result<Self, ValidationError> {
        in_range("age", age, MIN_AGE, MAX_AGE).map(Self)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// A camper ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewCamper {
    pub name: CamperName,
    pub age: CamperAge,
}

impl NewCamper {
    /// Validate raw request fields. Both are required.
    pub fn new(name: Option<&str>, age: Option<i64>) -> Result<Self, ValidationError> {
        let name = name.ok_or(ValidationError::Missing { field: "name" })?;
        let age = age.ok_or(ValidationError::Missing { field: "age" })?;

        Ok(Self {
            name: CamperName::new(name)?,
            age: CamperAge::new(age)?,
        })
    }
}

/// Partial update of a camper.
///
/// Only `name` and `age` are updatable. Every present field is validated
/// before the patch exists, so applying it never leaves a half-updated row.
#[derive(Debug, Clone, Default)]
pub struct CamperPatch {
    name: Option<CamperName>,
    age: Option<CamperAge>,
}

impl CamperPatch {
    /// Build a patch from an arbitrary JSON field map.
    ///
    /// Keys other than `name` and `age` are ignored. A present key with a
    /// null value is treated as an attempt to clear a required field.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut patch = Self::default();

        for (key, value) in fields {
            match key.as_str() {
                "name" => {
                    let name = match value {
                        Value::Null => return Err(ValidationError::Missing { field: "name" }),
                        Value::String(s) => s,
                        _ => {
                            return Err(ValidationError::WrongType {
                                field: "name",
                                expected: "a string",
                            })
                        }
                    };
                    patch.name = Some(CamperName::new(name)?);
                }
                "age" => {
                    if value.is_null() {
                        return Err(ValidationError::Missing { field: "age" });
                    }
                    let age = value.as_i64().ok_or(ValidationError::WrongType {
                        field: "age",
                        expected: "an integer",
                    })?;
                    patch.age = Some(CamperAge::new(age)?);
                }
                other => {
                    tracing::debug!(field = other, "ignoring non-updatable camper field");
                }
            }
        }

        Ok(patch)
    }

    pub fn name(&self) -> Option<&CamperName> {
        self.name.as_ref()
    }

    pub fn age(&self) -> Option<CamperAge> {
        self.age
    }

    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(CamperAge::new(8).is_ok());
        assert!(CamperAge::new(18).is_ok());
        assert!(matches!(
            CamperAge::new(7).unwrap_err(),
            ValidationError::OutOfRange { min: 8, max: 18, .. }
        ));
        assert!(CamperAge::new(19).is_err());
    }

    #[test]
    fn new_camper_requires_both_fields() {
        assert!(NewCamper::new(Some("Alex"), Some(12)).is_ok());
        assert_eq!(
            NewCamper::new(None, Some(12)).unwrap_err(),
            ValidationError::Missing { field: "name" }
        );
        assert_eq!(
            NewCamper::new(Some("Alex"), None).unwrap_err(),
            ValidationError::Missing { field: "age" }
        );
        assert_eq!(
            NewCamper::new(Some(""), Some(12)).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
    }

    #[test]
    fn whitespace_name_is_kept() {
        let name = CamperName::new("  ").unwrap();
        assert_eq!(name.as_str(), "  ");
    }

    #[test]
    fn patch_applies_allowed_fields() {
        let patch = CamperPatch::from_fields(&fields(json!({"name": "Jo", "age": 9}))).unwrap();
        assert_eq!(patch.name().map(CamperName::as_str), Some("Jo"));
        assert_eq!(patch.age().map(CamperAge::get), Some(9));
    }

    #[test]
    fn patch_ignores_unknown_keys() {
        let patch = CamperPatch::from_fields(&fields(json!({"id": 42, "nickname": "x"}))).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_rejects_whole_update_on_one_bad_field() {
        let err = CamperPatch::from_fields(&fields(json!({"name": "Jo", "age": 30}))).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));
    }

    #[test]
    fn patch_rejects_non_integer_age() {
        for bad in [json!("12"), json!(12.5), json!(true), json!(null)] {
            let map = fields(json!({ "age": bad }));
            assert!(CamperPatch::from_fields(&map).is_err(), "accepted {:?}", map);
        }
    }

    #[test]
    fn patch_rejects_null_or_empty_name() {
        assert!(CamperPatch::from_fields(&fields(json!({"name": null}))).is_err());
        assert!(CamperPatch::from_fields(&fields(json!({"name": ""}))).is_err());
        assert!(CamperPatch::from_fields(&fields(json!({"name": 7}))).is_err());
    }
}
