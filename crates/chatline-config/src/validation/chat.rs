use crate::schema::ChatlineConfig;

use super::helpers::check_range;

/// Mirror the service's accepted ranges so a bad value fails at startup
/// instead of turning every exchange into an error turn.
pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &ChatlineConfig) {
    if let Some(temperature) = config.chat.temperature {
        check_range(errors, "chat.temperature", temperature, 0.0..=2.0);
    }
    if let Some(max_tokens) = config.chat.max_tokens {
        check_range(errors, "chat.max_tokens", max_tokens, 1..=4000);
    }
}
