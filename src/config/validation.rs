use crate::config::types::Config;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Checks that timeouts and concurrency are nonzero and that the user agent
/// is not empty. Zero timeouts would disable reqwest's deadline entirely and
/// a zero-permit semaphore would deadlock the pipeline.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.fetch.page_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "page-timeout-secs must be greater than zero".to_string(),
        ));
    }

    if config.fetch.document_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "document-timeout-secs must be greater than zero".to_string(),
        ));
    }

    if config.fetch.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent must not be empty".to_string(),
        ));
    }

    if config.pipeline.max_concurrent == 0 {
        return Err(ConfigError::Validation(
            "max-concurrent must be greater than zero".to_string(),
        ));
    }

    if config.pipeline.max_content_chars == 0 {
        return Err(ConfigError::Validation(
            "max-content-chars must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
