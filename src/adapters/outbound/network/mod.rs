//! Registry client adapters: blocking HTTP with bounded retry.

mod npm_registry;
mod pypi_registry;

pub use npm_registry::NpmRegistryClient;
pub use pypi_registry::PyPiRegistryClient;

use std::time::Duration;

use crate::shared::Result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RETRIES: u32 = 3;
const RETRY_BASE_DELAY_MS: u64 = 100;

/// Shared blocking client configuration for both registries.
fn build_client() -> Result<reqwest::blocking::Client> {
    let user_agent = format!("polybom/{}", env!("CARGO_PKG_VERSION"));
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Runs `fetch` up to `MAX_RETRIES` times with linear backoff.
fn fetch_with_retry<T>(fetch: impl Fn() -> Result<T>) -> Result<T> {
    let mut last_error = None;

    for attempt in 1..=MAX_RETRIES {
        match fetch() {
            Ok(result) => return Ok(result),
            Err(error) => {
                last_error = Some(error);
                if attempt < MAX_RETRIES {
                    std::thread::sleep(Duration::from_millis(
                        RETRY_BASE_DELAY_MS * attempt as u64,
                    ));
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| anyhow::anyhow!("no fetch attempt was made")))
}

/// Rejects URL components that could escape the intended endpoint path.
/// `allow_path` permits the `/` of scoped npm names (`@scope/name`).
fn validate_url_component(component: &str, component_type: &str, allow_path: bool) -> Result<()> {
    if component.contains("..") {
        anyhow::bail!("{} contains '..' which is not allowed", component_type);
    }
    if component.contains('\\') || (!allow_path && component.contains('/')) {
        anyhow::bail!(
            "{} contains path separators which are not allowed",
            component_type
        );
    }
    if component.contains('#') || component.contains('?') {
        anyhow::bail!("{} contains URL-unsafe characters", component_type);
    }
    if component.chars().any(char::is_whitespace) {
        anyhow::bail!("{} contains whitespace", component_type);
    }
    Ok(())
}
