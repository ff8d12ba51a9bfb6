use anyhow::{anyhow, Result};

pub fn validate_username(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} is empty", field));
    }
    if value.contains(['/', '?', '#']) || value.chars().any(char::is_whitespace) {
        return Err(anyhow!("{} contains invalid characters", field));
    }
    Ok(())
}

pub fn validate_base_url(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", field));
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(anyhow!("{} must start with http:// or https://", field));
    }
    Ok(())
}
