use serde_json::Value;

use super::model::PayloadError;

/// Validate the raw API response shape and borrow out the homework list.
///
/// The list comes back untouched; records are parsed one at a time by
/// [`super::model::Homework::from_value`] so a bad record fails with a
/// field-level error. An empty list is valid and means there is nothing to
/// report this cycle.
pub fn check_response(payload: &Value) -> Result<&Vec<Value>, PayloadError> {
    let object = payload
        .as_object()
        .ok_or(PayloadError::Shape("response is not a JSON object"))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(PayloadError::MissingField("homeworks"))?;

    homeworks
        .as_array()
        .ok_or(PayloadError::Shape("\"homeworks\" is not an array"))
}
