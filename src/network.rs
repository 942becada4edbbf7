//! Network URL constants for the Bot API.

use std::time::Duration;

/// Default Bot API host.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Default per-request timeout enforced by the connection layer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the bot access token.
pub const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const ENV_API_URL: &str = "TELEGRAM_API_URL";

/// `<base>/bot<token>/<method>`
pub fn method_url(base_url: &str, token: &str, method: &str) -> String {
    format!("{}/bot{}/{}", base_url, token, method)
}

/// `<base>/file/bot<token>/<file_path>`
pub fn file_url(base_url: &str, token: &str, file_path: &str) -> String {
    format!(
        "{}/file/bot{}/{}",
        base_url,
        token,
        file_path.trim_start_matches('/')
    )
}
