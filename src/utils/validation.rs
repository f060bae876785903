use crate::utils::error::{PageError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PageError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Tile URLs carry `{s}`, `{z}`, `{x}`, `{y}` and `{r}` placeholders that are not valid URL
/// characters; they are filled with sample values before parsing.
pub fn validate_tile_template(field_name: &str, template: &str) -> Result<()> {
    let sample = template
        .replace("{s}", "a")
        .replace("{z}", "0")
        .replace("{x}", "0")
        .replace("{y}", "0")
        .replace("{r}", "");

    validate_url(field_name, &sample).map_err(|_| PageError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: template.to_string(),
        reason: "Tile URL template must be an http(s) URL".to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Element ids and class names: non-empty, no whitespace, no selector prefix.
pub fn validate_dom_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.chars().any(char::is_whitespace) || value.starts_with(['#', '.']) {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a bare id or class name".to_string(),
        });
    }
    Ok(())
}

pub fn validate_fragment(field_name: &str, value: &str) -> Result<()> {
    if !value.starts_with('#') || value.chars().any(char::is_whitespace) {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Fragment links must start with '#' and contain no whitespace".to_string(),
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
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
