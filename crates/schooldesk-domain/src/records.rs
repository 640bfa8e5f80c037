//! Loading record lists exported from the administration backend.

use schooldesk_core::{SchoolDeskError, SchoolDeskResult};
use serde::de::DeserializeOwned;

/// Parse a JSON array of records.
///
/// Also accepts the backend's list envelope, `{"data": [...]}`.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> SchoolDeskResult<Vec<T>> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| SchoolDeskError::Serialization(e.to_string()))?;

    let list = match value {
        serde_json::Value::Object(mut envelope) => envelope.remove("data").ok_or_else(|| {
            SchoolDeskError::Serialization("expected a record array or a data envelope".into())
        })?,
        other => other,
    };

    serde_json::from_value(list).map_err(|e| SchoolDeskError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Class, CountryCode, Role, Status};

    #[test]
    fn test_parse_plain_array() {
        let json = r#"[
            {"id": "1", "roleName": "Administrator", "description": "Full system access",
             "createdDate": "2024-01-15", "status": "Active"},
            {"id": "5", "roleName": "Guest", "description": "Limited read-only access",
             "createdDate": "2024-02-01", "status": "Inactive"}
        ]"#;

        let roles: Vec<Role> = parse_records(json).unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[0].role_name, "Administrator");
        assert_eq!(roles[1].status, Status::Inactive);
    }

    #[test]
    fn test_parse_data_envelope() {
        let json = r#"{"success": true, "message": "ok", "data": [
            {"classId": "c-1", "className": "Algebra", "gradeLevel": "Grade 9",
             "deletedAt": null, "createdAt": "2024-01-01T00:00:00Z",
             "updatedAt": "2024-01-02T00:00:00Z"}
        ]}"#;

        let classes: Vec<Class> = parse_records(json).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].id, "c-1");
        assert!(classes[0].description.is_none());
    }

    #[test]
    fn test_object_without_data_is_rejected() {
        let err = parse_records::<CountryCode>(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, SchoolDeskError::Serialization(_)));
    }

    #[test]
    fn test_wrong_shape_is_serialization_error() {
        let err = parse_records::<CountryCode>(r#"[{"id": 1}]"#).unwrap_err();
        assert!(matches!(err, SchoolDeskError::Serialization(_)));

        let err = parse_records::<CountryCode>("not json").unwrap_err();
        assert!(matches!(err, SchoolDeskError::Serialization(_)));
    }
}
