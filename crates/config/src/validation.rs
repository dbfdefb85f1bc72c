//! Per-section validation and merging

pub use crate::error::ValidationError;

/// One `[table]` of `config.toml`
pub trait ConfigSection: Default {
    /// Every problem in the section, not just the first
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Overlays `other` onto `self`
    fn merge(&mut self, other: Self);

    fn section_name(&self) -> &'static str;
}

/// Field checks shared by the sections
pub struct Validator;

impl Validator {
    /// Inclusive on both ends
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            Err(ValidationError::with_value(
                field,
                format!("must be between {} and {}", min, max),
                value,
            ))
        } else {
            Ok(())
        }
    }

    /// Whitespace-only counts as empty
    pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::new(field, "must not be empty"))
        } else {
            Ok(())
        }
    }

    /// Accepts anything starting with `http://` or `https://`, any case
    pub fn http_url(value: &str, field: &str) -> Result<(), ValidationError> {
        let lower = value.trim().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(())
        } else {
            Err(ValidationError::with_value(
                field,
                "must start with http:// or https://",
                value,
            ))
        }
    }

    pub fn collect_errors(
        results: Vec<Result<(), ValidationError>>,
    ) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_bounds_are_inclusive() {
        assert!(Validator::in_range(1u64, 1, 300, "fetch.timeout_secs").is_ok());
        assert!(Validator::in_range(300u64, 1, 300, "fetch.timeout_secs").is_ok());

        let err = Validator::in_range(301u64, 1, 300, "fetch.timeout_secs").unwrap_err();
        assert_eq!(err.value.as_deref(), Some("301"));
        assert!(Validator::in_range(0u64, 1, 300, "fetch.timeout_secs").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(Validator::not_empty("  hello  ", "test").is_ok());
        assert!(Validator::not_empty("   ", "test").is_err());
    }

    #[test]
    fn test_http_url() {
        assert!(Validator::http_url("http://rss.cnn.com/rss", "test").is_ok());
        assert!(Validator::http_url("HTTPS://example.com", "test").is_ok());
        assert!(Validator::http_url("ftp://example.com", "test").is_err());
        assert!(Validator::http_url("example.com", "test").is_err());
    }

    #[test]
    fn test_collect_errors_some_err() {
        let results = vec![
            Ok(()),
            Err(ValidationError::new("field1", "error1")),
            Ok(()),
            Err(ValidationError::new("field2", "error2")),
        ];
        let errors = Validator::collect_errors(results).expect_err("Should collect errors");
        assert_eq!(errors.len(), 2);
    }
}
