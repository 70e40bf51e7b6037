use crate::domain::{LocationUpdate, UserId};
use crate::http::ApiError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

const USER_ID: &str = "userID";
const UPSERT_FIELDS: [&str; 5] = [USER_ID, "longitude", "latitude", "height", "status"];

/// Validates a PUT body. All missing fields are reported together, `null` counts as missing.
pub fn parse_upsert(body: &[u8]) -> Result<LocationUpdate, ApiError> {
    let object = parse_object(body)?;
    require(&object, &UPSERT_FIELDS)?;

    Ok(LocationUpdate {
        user_id: field(&object, USER_ID)?,
        longitude: field(&object, "longitude")?,
        latitude: field(&object, "latitude")?,
        height: field(&object, "height")?,
        status: field(&object, "status")?,
    })
}

pub fn parse_delete(body: &[u8]) -> Result<UserId, ApiError> {
    let object = parse_object(body)?;
    require(&object, &[USER_ID])?;

    field(&object, USER_ID)
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body).map_err(|_| ApiError::InvalidJson)? {
        Value::Object(object) => Ok(object),
        _ => Err(ApiError::InvalidInput("Expected a JSON object".to_string())),
    }
}

fn require(object: &Map<String, Value>, fields: &[&'static str]) -> Result<(), ApiError> {
    let missing = fields
        .iter()
        .copied()
        .filter(|name| object.get(*name).is_none_or(Value::is_null))
        .collect::<Vec<_>>();

    if missing.is_empty() { Ok(()) } else { Err(ApiError::MissingFields(missing)) }
}

fn field<T: DeserializeOwned>(object: &Map<String, Value>, name: &str) -> Result<T, ApiError> {
    let value = object.get(name).cloned().unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| ApiError::InvalidInput(format!("Invalid value for '{}': {}", name, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_a_complete_upsert() {
        let body = br#"{"userID": "u1", "longitude": 106.66, "latitude": 10.76, "height": 1.5, "status": 0}"#;

        let update = parse_upsert(body).unwrap();

        assert_eq!(
            update,
            LocationUpdate {
                user_id: UserId::from("u1"),
                longitude: 106.66,
                latitude: 10.76,
                height: 1.5,
                status: Status::Active,
            }
        );
    }

    #[test]
    fn ignores_a_client_supplied_timestamp() {
        let body = br#"{"userID": 5, "longitude": 1, "latitude": 2, "height": 3, "status": 2, "lastUpdate": 1}"#;

        let update = parse_upsert(body).unwrap();

        assert_eq!(update.user_id, UserId::from(5_u64));
        assert_eq!(update.longitude, 1.0);
    }

    #[rstest]
    #[case::empty_object(br#"{}"#.as_slice(), vec!["userID", "longitude", "latitude", "height", "status"])]
    #[case::missing_status(br#"{"userID": "u1", "longitude": 1, "latitude": 2, "height": 3}"#.as_slice(), vec!["status"])]
    #[case::null_fields(br#"{"userID": null, "longitude": 1, "latitude": 2, "height": null, "status": 0}"#.as_slice(), vec!["userID", "height"])]
    fn reports_all_missing_fields(#[case] body: &[u8], #[case] expected: Vec<&str>) {
        match parse_upsert(body) {
            Err(ApiError::MissingFields(missing)) => assert_eq!(missing, expected),
            other => panic!("Expected missing fields, found {:?}", other),
        }
    }

    #[rstest]
    #[case::not_json(b"{userID".as_slice())]
    #[case::empty(b"".as_slice())]
    fn rejects_invalid_json(#[case] body: &[u8]) {
        assert!(matches!(parse_upsert(body), Err(ApiError::InvalidJson)));
        assert!(matches!(parse_delete(body), Err(ApiError::InvalidJson)));
    }

    #[rstest]
    #[case::array(br#"[1, 2]"#.as_slice())]
    #[case::text_longitude(br#"{"userID": "u1", "longitude": "east", "latitude": 2, "height": 3, "status": 0}"#.as_slice())]
    #[case::fractional_status(br#"{"userID": "u1", "longitude": 1, "latitude": 2, "height": 3, "status": 0.5}"#.as_slice())]
    #[case::object_user_id(br#"{"userID": {}, "longitude": 1, "latitude": 2, "height": 3, "status": 0}"#.as_slice())]
    fn rejects_malformed_input(#[case] body: &[u8]) {
        assert!(matches!(parse_upsert(body), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn parses_a_delete() {
        assert_eq!(parse_delete(br#"{"userID": "u1"}"#).unwrap(), UserId::from("u1"));
    }

    #[test]
    fn delete_requires_a_user_id() {
        assert!(matches!(parse_delete(br#"{"id": "u1"}"#), Err(ApiError::MissingFields(fields)) if fields == vec!["userID"]));
    }
}
