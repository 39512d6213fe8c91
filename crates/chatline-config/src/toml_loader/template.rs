//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Chatline Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
base_url = "http://127.0.0.1:8000"
# connect_timeout_secs = 10    # 1-600
# request_timeout_secs = 120   # 1-600

[pacing]
# Delay before a reply is shown, drawn from [min_delay_ms, max_delay_ms).
# enabled = true
# min_delay_ms = 1000
# max_delay_ms = 2000          # up to 60000

[chat]
# system_prompt = "You are a helpful assistant."
# temperature = 0.7            # 0.0-2.0
# max_tokens = 1000            # 1-4000

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
}
