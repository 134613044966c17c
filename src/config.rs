use crate::errors::ConfigError;
use reqwest::Url;
use std::env;

pub const BASE_URL_VAR: &str = "COUNTDOWN_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub fn resolve_base_url() -> Result<Url, ConfigError> {
    parse_base_url(env::var(BASE_URL_VAR).ok().as_deref())
}

pub fn parse_base_url(value: Option<&str>) -> Result<Url, ConfigError> {
    let raw = match value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_BASE_URL,
    };

    let invalid = |reason: String| ConfigError::InvalidValue {
        var: BASE_URL_VAR,
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid("scheme must be http or https".to_string()));
    }
    Ok(url)
}
