use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Address shape check: local part and a dotted domain ending in an
/// alphabetic TLD. Leading dots and `..` in the local part are rejected.
pub fn validate_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }
    EMAIL_PATTERN.is_match(email)
}

/// Length in characters, untrimmed.
///
/// Counts Unicode scalar values rather than UTF-16 code units, so an emoji
/// outside the BMP counts once. Intentional.
pub fn validate_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_positive_duration(field_name: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: "Duration must be greater than zero".to_string(),
        });
    }
    Ok(())
}
