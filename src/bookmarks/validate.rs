use serde_json::Value;

use super::NewBookmark;
use crate::error::ValidationError;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Checks a create payload one rule at a time, reporting the first violation.
/// A client-supplied `id` field is accepted and ignored; ids are assigned by
/// the store.
pub fn validate(payload: &Value) -> Result<NewBookmark, ValidationError> {
    let name = require_text(payload, "name")?;
    let url = require_text(payload, "url")?;
    let rating = require_rating(payload)?;

    let description = payload
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(NewBookmark {
        name,
        url,
        description,
        rating: rating as i32,
    })
}

fn require_text(payload: &Value, field: &'static str) -> Result<String, ValidationError> {
    match payload.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn require_rating(payload: &Value) -> Result<i64, ValidationError> {
    let value = match payload.get("rating") {
        Some(v) if !v.is_null() => v,
        _ => return Err(ValidationError::MissingField("rating")),
    };

    let rating = parse_rating(value).ok_or(ValidationError::InvalidRating)?;

    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::InvalidRating)
    }
}

fn parse_rating(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_payload() {
        let payload = json!({
            "name": "PostTest",
            "url": "www.testpost.com",
            "description": "optional description",
            "rating": 5
        });

        let input = validate(&payload).unwrap();
        assert_eq!(input.name, "PostTest");
        assert_eq!(input.url, "www.testpost.com");
        assert_eq!(input.description.as_deref(), Some("optional description"));
        assert_eq!(input.rating, 5);
    }

    #[test]
    fn missing_name_wins_over_other_missing_fields() {
        let payload = json!({});
        assert_eq!(
            validate(&payload).unwrap_err(),
            ValidationError::MissingField("name")
        );
    }

    #[test]
    fn empty_name_counts_as_missing() {
        let payload = json!({ "name": "", "url": "blank", "rating": 4 });
        assert_eq!(
            validate(&payload).unwrap_err(),
            ValidationError::MissingField("name")
        );
    }

    #[test]
    fn missing_url_reported_before_missing_rating() {
        let payload = json!({ "name": "testme" });
        assert_eq!(
            validate(&payload).unwrap_err(),
            ValidationError::MissingField("url")
        );
    }

    #[test]
    fn missing_rating_reported_last() {
        let payload = json!({ "name": "title_Test", "url": "blank" });
        assert_eq!(
            validate(&payload).unwrap_err(),
            ValidationError::MissingField("rating")
        );
    }

    #[test]
    fn null_rating_counts_as_missing() {
        let payload = json!({ "name": "x", "url": "y", "rating": null });
        assert_eq!(
            validate(&payload).unwrap_err(),
            ValidationError::MissingField("rating")
        );
    }

    #[test]
    fn non_numeric_rating_is_invalid() {
        let payload = json!({ "name": "hello", "url": "blank", "rating": "fglkfdjgk" });
        assert_eq!(validate(&payload).unwrap_err(), ValidationError::InvalidRating);
    }

    #[test]
    fn out_of_range_rating_is_invalid() {
        let payload = json!({ "name": "hello", "url": "blank", "rating": 30 });
        assert_eq!(validate(&payload).unwrap_err(), ValidationError::InvalidRating);

        let payload = json!({ "name": "hello", "url": "blank", "rating": 0 });
        assert_eq!(validate(&payload).unwrap_err(), ValidationError::InvalidRating);
    }

    #[test]
    fn numeric_string_rating_is_accepted() {
        let payload = json!({ "name": "hello", "url": "blank", "rating": "4" });
        assert_eq!(validate(&payload).unwrap().rating, 4);
    }

    #[test]
    fn fractional_rating_is_invalid() {
        let payload = json!({ "name": "hello", "url": "blank", "rating": 4.5 });
        assert_eq!(validate(&payload).unwrap_err(), ValidationError::InvalidRating);
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let payload = json!({ "id": 13, "name": "n", "url": "u", "rating": 1 });
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn non_string_name_counts_as_missing() {
        let payload = json!({ "name": 7, "url": "blank", "rating": 4 });
        assert_eq!(
            validate(&payload).unwrap_err(),
            ValidationError::MissingField("name")
        );
    }
}
