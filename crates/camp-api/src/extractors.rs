//! # Custom Extractors
//!
//! Helpers for pulling JSON bodies and integer path ids out of requests
//! with the registry's error mapping applied. Field rules themselves live in
//! `camp_core`; request DTOs convert into its draft and patch types.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use camp_core::ValidationError;

use crate::error::AppError;

/// Extract a JSON object body into `T`, mapping every failure to
/// [`AppError::BadRequest`].
///
/// The body is parsed as a [`Value`] first: serde fills a struct from a
/// JSON array positionally, so anything but an object is refused before
/// `T` is built. Handlers take `Result<Json<Value>, JsonRejection>` so that
/// rejections keep the `{"error": ...}` body shape:
/// ```ignore
/// async fn handler(body: Result<Json<Value>, JsonRejection>) -> Result<..., AppError> {
///     let req: T = extract_json(body)?;
/// }
/// ```
pub fn extract_json<T: DeserializeOwned>(
    result: Result<Json<Value>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = result.map_err(|err| AppError::BadRequest(err.body_text()))?;
    if !value.is_object() {
        return Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|err| {
        AppError::BadRequest(format!("Failed to deserialize the JSON body: {err}"))
    })
}

/// Extract an integer path id.
///
/// A segment that is not an integer cannot name a row, so it is reported as
/// `"<what> not found"` rather than as a malformed request.
pub fn extract_id<T: From<i64>>(
    result: Result<Path<i64>, PathRejection>,
    what: &str,
) -> Result<T, AppError> {
    result
        .map(|Path(raw)| T::from(raw))
        .map_err(|_| AppError::not_found(what))
}

/// Deserialize a field so that an explicit `null` is distinguishable from
/// an absent key.
///
/// Use with `#[serde(default, deserialize_with = "present")]` on an
/// `Option<Option<T>>`: absent → `None`, `null` → `Some(None)`,
/// value → `Some(Some(v))`.
pub fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Collapse a [`present`] field for a column that cannot be null.
///
/// Absent stays `None`; an explicit `null` is rejected as missing.
pub fn non_null<T>(
    field: Option<Option<T>>,
    name: &'static str,
) -> Result<Option<T>, ValidationError> {
    match field {
        None => Ok(None),
        Some(None) => Err(ValidationError::Required(name)),
        Some(Some(value)) => Ok(Some(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "present")]
        name: Option<Option<String>>,
    }

    #[test]
    fn present_distinguishes_null_from_absent() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.name, None);

        let null: Probe = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(null.name, Some(None));

        let value: Probe = serde_json::from_str(r#"{"name": "Alex"}"#).unwrap();
        assert_eq!(value.name, Some(Some("Alex".to_string())));
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Pair {
        name: Option<String>,
        age: Option<i64>,
    }

    #[test]
    fn extract_json_accepts_objects() {
        let pair: Pair = extract_json(Ok(Json(json!({"name": "Alex", "age": 12})))).unwrap();
        assert_eq!(pair.name.as_deref(), Some("Alex"));
        assert_eq!(pair.age, Some(12));
    }

    #[test]
    fn extract_json_rejects_non_objects() {
        for body in [json!(["Alex", 12]), json!("Alex"), json!(12), json!(null)] {
            let err = extract_json::<Pair>(Ok(Json(body.clone()))).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "body {body}");
        }
    }

    #[test]
    fn extract_json_rejects_unknown_keys() {
        let err = extract_json::<Pair>(Ok(Json(json!({"name": "Alex", "id": 3})))).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn non_null_rejects_explicit_null() {
        assert_eq!(non_null::<i64>(None, "age"), Ok(None));
        assert_eq!(non_null(Some(Some(9)), "age"), Ok(Some(9)));
        assert_eq!(
            non_null::<i64>(Some(None), "age"),
            Err(ValidationError::Required("age"))
        );
    }
}
