//! Conversion of untyped field mappings into typed create/update DTOs.
//!
//! Create is strict: a key outside the entity's [`Entity::FIELDS`] fails the
//! whole payload. Update is lenient: such keys are dropped before parsing.

use roster_core::error::CoreError;
use serde_json::{Map, Value};

use crate::entity::Entity;

/// A JSON object of field name to value.
pub type Fields = Map<String, Value>;

/// Parse a full field mapping into `E::Create`.
pub fn parse_create<E: Entity>(fields: Fields) -> Result<E::Create, CoreError> {
    if let Some(field) = fields.keys().find(|key| !E::FIELDS.contains(&key.as_str())) {
        return Err(CoreError::UnrecognizedField {
            entity: E::NAME,
            field: field.clone(),
        });
    }
    parse::<E, E::Create>(fields)
}

/// Parse a partial field mapping into `E::Update`, ignoring unknown keys.
pub fn parse_update<E: Entity>(mut fields: Fields) -> Result<E::Update, CoreError> {
    fields.retain(|key, _| E::FIELDS.contains(&key.as_str()));
    parse::<E, E::Update>(fields)
}

/// Deserialize a present key into `Some`, keeping an explicit `null` as
/// `Some(None)`. Pair with `#[serde(default)]` so an absent key stays `None`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}

fn parse<E: Entity, T: serde::de::DeserializeOwned>(fields: Fields) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| CoreError::Validation(format!("invalid {} payload: {e}", E::NAME)))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::models::association::PersonWork;
    use crate::models::organization::Organization;
    use crate::models::person::Person;
    use crate::models::work::Work;

    fn object(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn create_accepts_complete_payload() {
        let input = parse_create::<Organization>(object(json!({
            "name": "Acme",
            "phone_number": "555-0100",
            "contact_email_address": "a@acme.test",
        })))
        .unwrap();
        assert_eq!(input.name, "Acme");
        assert_eq!(input.phone_number, "555-0100");
    }

    #[test]
    fn create_rejects_unknown_field() {
        let err = parse_create::<Person>(object(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.test",
            "minimum_fee": 10,
            "nickname": "countess",
        })))
        .unwrap_err();
        assert_matches!(
            err,
            CoreError::UnrecognizedField { entity: "Person", ref field } if field == "nickname"
        );
    }

    #[test]
    fn create_rejects_client_supplied_id() {
        let err = parse_create::<Organization>(object(json!({
            "id": 4,
            "name": "Acme",
            "phone_number": "555-0100",
            "contact_email_address": "a@acme.test",
        })))
        .unwrap_err();
        assert_matches!(err, CoreError::UnrecognizedField { ref field, .. } if field == "id");
    }

    #[test]
    fn create_reports_missing_field_as_validation() {
        let err = parse_create::<Organization>(object(json!({ "name": "Acme" }))).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn update_ignores_unknown_fields_and_keeps_known_ones() {
        let changes = parse_update::<Work>(object(json!({
            "title": "Heist II",
            "sequel_of": 1,
            "id": 99,
        })))
        .unwrap();
        assert_eq!(changes.title.as_deref(), Some("Heist II"));
        assert!(changes.budget.is_none());
        assert!(changes.organization_id.is_none());
    }

    #[test]
    fn update_rejects_ill_typed_known_field() {
        let err = parse_update::<Work>(object(json!({ "budget": "lots" }))).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn update_distinguishes_null_role_from_absent_role() {
        let cleared = parse_update::<PersonWork>(object(json!({ "role": null }))).unwrap();
        assert_eq!(cleared.role, Some(None));

        let untouched = parse_update::<PersonWork>(object(json!({ "work_id": 2 }))).unwrap();
        assert_eq!(untouched.role, None);

        let renamed = parse_update::<PersonWork>(object(json!({ "role": "editor" }))).unwrap();
        assert_eq!(renamed.role, Some(Some("editor".to_string())));
    }
}
