use chatline_common::ConfigError;

use crate::schema::ChatlineConfig;

use super::helpers::check_range;

fn base_url_problem(name: &str, url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        Some(format!("{name} is empty"))
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        Some(format!("{name} = {url:?} must start with http:// or https://"))
    } else {
        None
    }
}

/// Check a service address supplied outside the config file.
pub fn validate_base_url(name: &str, url: &str) -> Result<(), ConfigError> {
    match base_url_problem(name, url) {
        Some(problem) => Err(ConfigError::ValidationError(problem)),
        None => Ok(()),
    }
}

/// Validate the service address and transport timeouts.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &ChatlineConfig) {
    errors.extend(base_url_problem("api.base_url", &config.api.base_url));

    check_range(errors, "api.connect_timeout_secs", config.api.connect_timeout_secs, 1..=600);
    check_range(errors, "api.request_timeout_secs", config.api.request_timeout_secs, 1..=600);
}
