use crate::utils::error::{Result, ShowcaseError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> ShowcaseError {
    ShowcaseError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts absolute `http`/`https` URLs with a host.
pub fn validate_url(field_name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value)
        .map_err(|e| invalid(field_name, value, format!("not a valid URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            value,
            format!("scheme '{}' is not served over HTTP", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, value, "URL has no host"));
    }
    Ok(())
}

/// Host pages, output files and local source directories.
pub fn validate_path(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field_name, value, "path is empty"));
    }
    if value.contains('\0') {
        return Err(invalid(field_name, value, "path contains a NUL byte"));
    }
    Ok(())
}

/// A source location is either an http(s) base URL or a local directory.
pub fn validate_source_location(field_name: &str, location: &str) -> Result<()> {
    if is_remote_location(location) {
        validate_url(field_name, location)
    } else {
        validate_path(field_name, location)
    }
}

pub fn is_remote_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

pub fn validate_resource_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    let has_json_extension = std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if !has_json_extension {
        return Err(invalid(field_name, name, "resource must be a .json file"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "value is blank"));
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
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
