//! Configuration validation logic
//!
//! Validation runs after resolution and enforces the invariant that a
//! successfully resolved configuration has every field populated.

use crate::config::error::ConfigError;
use crate::config::settings::{KafkaConfig, Settings};

/// URL schemes accepted for the system under test
const VALID_URL_SCHEMES: &[&str] = &["http://", "https://"];

impl Settings {
    /// Validate all configuration settings
    ///
    /// # Validation Rules
    /// - Base URL must not be empty and must be an http(s) endpoint
    /// - Kafka settings must pass [`KafkaConfig::validate`]
    ///
    /// Credentials are not validated: empty strings mean the environment
    /// requires no authentication.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate base URL is not empty
        if self.base_url.is_empty() {
            return Err(ConfigError::validation(
                "baseUrl",
                "Base URL is required. Please specify the root endpoint of the system under test.",
            ));
        }

        // Validate base URL format
        if !self.is_valid_base_url() {
            return Err(ConfigError::validation(
                "baseUrl",
                "Invalid base URL format. Expected format: http[s]://host[:port]/path",
            ));
        }

        self.kafka.validate()?;

        Ok(())
    }

    /// Check if the base URL has a valid format
    fn is_valid_base_url(&self) -> bool {
        VALID_URL_SCHEMES
            .iter()
            .any(|scheme| self.base_url.starts_with(scheme))
    }
}

impl KafkaConfig {
    /// Validate message broker configuration
    ///
    /// # Validation Rules
    /// - Bootstrap servers must not be empty
    /// - Topic and consumer group names must not be empty
    /// - Poll timeout and message cap must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate bootstrap servers
        if self.bootstrap_servers.is_empty() {
            return Err(ConfigError::validation(
                "kafka.bootstrapServers",
                "Bootstrap servers are required. Please specify the broker connection string.",
            ));
        }

        // Validate topic name
        if self.topics.todo_events.is_empty() {
            return Err(ConfigError::validation(
                "kafka.topics.todoEvents",
                "Topic name must not be empty.",
            ));
        }

        // Validate consumer group
        if self.consumer_group.is_empty() {
            return Err(ConfigError::validation(
                "kafka.consumerGroup",
                "Consumer group must not be empty.",
            ));
        }

        // Validate poll timeout
        if self.timeout_ms == 0 {
            return Err(ConfigError::validation(
                "kafka.timeoutMs",
                "Poll timeout must be greater than 0 milliseconds.",
            ));
        }

        // Validate message cap
        if self.max_messages == 0 {
            return Err(ConfigError::validation(
                "kafka.maxMessages",
                "Message cap must be greater than 0.",
            ));
        }

        Ok(())
    }
}
