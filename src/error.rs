use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidRating,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ValidationError::*;
        match self {
            MissingField(field) => write!(f, "Missing '{}' in request body", field),
            InvalidRating => write!(f, "Invalid rating"),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_quotes_field_name() {
        let err = ValidationError::MissingField("name");
        assert_eq!(err.to_string(), "Missing 'name' in request body");
    }

    #[test]
    fn invalid_rating_message() {
        assert_eq!(ValidationError::InvalidRating.to_string(), "Invalid rating");
    }
}
