//! Configuration settings structures for todo-testkit
//!
//! This module defines the settings handed to the test runner once the
//! target environment is resolved. Fields serialize in camelCase, the shape
//! the suite runner consumes (`baseUrl`, `bootstrapServers`, ...).

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

fn default_todo_events_topic() -> String {
    "todo-events-topic".to_string()
}

fn default_consumer_group() -> String {
    "todo-test-group".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_messages() -> usize {
    10
}

// ============================================================================
// Topic Configuration
// ============================================================================

/// Logical-to-physical topic name mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicsConfig {
    /// Physical topic carrying todo lifecycle events
    #[serde(default = "default_todo_events_topic")]
    pub todo_events: String,
}

impl Default for TopicsConfig {
    fn default() -> Self {
        Self {
            todo_events: default_todo_events_topic(),
        }
    }
}

// ============================================================================
// Kafka Configuration
// ============================================================================

/// Message broker connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KafkaConfig {
    /// Broker addresses for the initial cluster connection
    #[serde(default)]
    pub bootstrap_servers: String,

    /// Topic name mapping
    #[serde(default)]
    pub topics: TopicsConfig,

    /// Consumer group joined by the test consumer
    #[serde(default = "default_consumer_group")]
    pub consumer_group: String,

    /// Poll deadline in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Upper bound on messages drained per poll cycle
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

impl KafkaConfig {
    /// Get the poll deadline as a `Duration`
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Build the consumer properties for the broker client
    ///
    /// Offsets are read from the earliest position without auto commit, so
    /// the suite observes every event produced during a run. SASL settings
    /// are added only when credentials are provided.
    pub fn client_properties(&self, security: &SecurityConfig) -> BTreeMap<String, String> {
        let mut props = BTreeMap::new();
        props.insert(
            "bootstrap.servers".to_string(),
            self.bootstrap_servers.clone(),
        );
        props.insert("group.id".to_string(), self.consumer_group.clone());
        props.insert("auto.offset.reset".to_string(), "earliest".to_string());
        props.insert("enable.auto.commit".to_string(), "false".to_string());

        if security.credentials_provided() {
            props.insert("security.protocol".to_string(), "SASL_SSL".to_string());
            props.insert("sasl.mechanism".to_string(), "PLAIN".to_string());
            props.insert(
                "sasl.username".to_string(),
                security.kafka_username.clone(),
            );
            props.insert(
                "sasl.password".to_string(),
                security.kafka_password.clone(),
            );
        }

        props
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            bootstrap_servers: String::new(),
            topics: TopicsConfig::default(),
            consumer_group: default_consumer_group(),
            timeout_ms: default_timeout_ms(),
            max_messages: default_max_messages(),
        }
    }
}

// ============================================================================
// Security Configuration
// ============================================================================

/// Broker credentials
///
/// Empty strings mean the environment requires no authentication. This is
/// distinct from the fields being absent in the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityConfig {
    /// SASL username, empty when authentication is not required
    #[serde(default)]
    pub kafka_username: String,

    /// SASL password, empty when authentication is not required
    #[serde(default)]
    pub kafka_password: String,
}

impl SecurityConfig {
    /// Check whether both credential fields are populated
    pub fn credentials_provided(&self) -> bool {
        !self.kafka_username.is_empty() && !self.kafka_password.is_empty()
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete test-suite settings
///
/// Produced fresh on each resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Root HTTP endpoint of the system under test
    #[serde(default)]
    pub base_url: String,

    /// Message broker configuration
    #[serde(default)]
    pub kafka: KafkaConfig,

    /// Broker credentials
    #[serde(default)]
    pub security: SecurityConfig,
}
