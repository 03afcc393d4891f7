//! Environment-to-settings resolution
//!
//! Each recognized environment maps to a fixed connection profile. The
//! profile table is data: adding an environment means adding a row here and
//! a variant in [`Environment`].

use tracing::info;

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::{KafkaConfig, SecurityConfig, Settings};

/// Fixed connection profile for one environment
struct Profile {
    base_url: &'static str,
    bootstrap_servers: &'static str,
    kafka_username: &'static str,
    kafka_password: &'static str,
}

/// Local development: service and broker on localhost, no authentication
const DEV: Profile = Profile {
    base_url: "http://localhost:8080/api",
    bootstrap_servers: "localhost:9092",
    kafka_username: "",
    kafka_password: "",
};

/// Shared staging: TLS endpoints, SASL credentials required
const STAGE: Profile = Profile {
    base_url: "https://stage-api.example.com/api",
    bootstrap_servers: "stage-kafka.example.com:9092",
    kafka_username: "stage-user",
    kafka_password: "stage-pass",
};

impl Environment {
    fn profile(self) -> &'static Profile {
        match self {
            Environment::Dev => &DEV,
            Environment::Stage => &STAGE,
        }
    }
}

/// Produce the settings for a resolved environment
///
/// Pure and infallible: unrecognized discriminators are rejected earlier,
/// when the [`Environment`] is parsed. Repeated calls yield structurally
/// equal settings.
pub fn settings_for(environment: Environment) -> Settings {
    let profile = environment.profile();
    Settings {
        base_url: profile.base_url.to_string(),
        kafka: KafkaConfig {
            bootstrap_servers: profile.bootstrap_servers.to_string(),
            ..Default::default()
        },
        security: SecurityConfig {
            kafka_username: profile.kafka_username.to_string(),
            kafka_password: profile.kafka_password.to_string(),
        },
    }
}

/// Configuration resolver for the test suite
///
/// The entry point used once per test-run initialization: determine the
/// target environment, produce its settings, validate them, and report what
/// was chosen.
#[derive(Debug)]
pub struct ConfigResolver {
    /// Resolved target environment
    environment: Environment,
}

impl ConfigResolver {
    /// Create a resolver from an explicit discriminator
    ///
    /// `None` and blank strings select the `dev` default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] when the discriminator
    /// names no known environment.
    pub fn new(name: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::resolve(name)?,
        })
    }

    /// Create a resolver from the `TODO_TEST_ENV` environment variable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownEnvironment`] when the variable holds
    /// an unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env()?,
        })
    }

    /// Get the resolved environment
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Produce and validate the settings for the resolved environment
    ///
    /// Emits two diagnostic records (chosen environment, resolved base URL)
    /// before returning. The diagnostics are advisory only and never affect
    /// the returned value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when the resolved settings
    /// fail validation.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings = settings_for(self.environment);
        settings.validate()?;

        info!(environment = %self.environment, "test environment selected");
        info!(base_url = %settings.base_url, "base URL resolved");

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Mutex;

    // Global mutex to ensure tests run sequentially to avoid env var conflicts
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to safely set environment variables for a test
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            // Store original value for restoration
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            // Store original value for restoration
            let original = std::env::var(key).ok();
            self.vars_to_restore.push((key.to_string(), original));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            // Restore all environment variables
            for (key, original_value) in &self.vars_to_restore {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_dev_profile() {
        let settings = settings_for(Environment::Dev);
        assert_eq!(settings.base_url, "http://localhost:8080/api");
        assert_eq!(settings.kafka.bootstrap_servers, "localhost:9092");
        assert_eq!(settings.security.kafka_username, "");
        assert_eq!(settings.security.kafka_password, "");
    }

    #[test]
    fn test_stage_profile() {
        let settings = settings_for(Environment::Stage);
        assert_eq!(settings.base_url, "https://stage-api.example.com/api");
        assert_eq!(
            settings.kafka.bootstrap_servers,
            "stage-kafka.example.com:9092"
        );
        assert_eq!(settings.security.kafka_username, "stage-user");
        assert_eq!(settings.security.kafka_password, "stage-pass");
    }

    #[test]
    fn test_profiles_share_fixed_defaults() {
        for environment in [Environment::Dev, Environment::Stage] {
            let settings = settings_for(environment);
            assert_eq!(settings.kafka.topics.todo_events, "todo-events-topic");
            assert_eq!(settings.kafka.consumer_group, "todo-test-group");
            assert_eq!(settings.kafka.timeout_ms, 10_000);
            assert_eq!(settings.kafka.max_messages, 10);
        }
    }

    #[test]
    fn test_resolver_default_is_dev() {
        let resolver = ConfigResolver::new(None).expect("Should create resolver");
        assert_eq!(resolver.environment(), Environment::Dev);
        assert_eq!(
            resolver.load().expect("Should load settings"),
            settings_for(Environment::Dev)
        );
    }

    #[test]
    fn test_resolver_blank_name_is_dev() {
        let resolver = ConfigResolver::new(Some("")).expect("Should create resolver");
        assert_eq!(
            resolver.load().expect("Should load settings"),
            settings_for(Environment::Dev)
        );
    }

    #[test]
    fn test_resolver_unknown_environment() {
        let err = ConfigResolver::new(Some("qa")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEnvironment(ref name) if name == "qa"));
        assert_eq!(err.to_string(), "Unknown environment: qa");
    }

    #[test]
    fn test_resolver_from_env_stage() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.set(Environment::ENV_VAR, "stage");

        let resolver = ConfigResolver::from_env().expect("Should create resolver");
        let settings = resolver.load().expect("Should load settings");
        assert_eq!(settings.base_url, "https://stage-api.example.com/api");
        assert_eq!(settings.security.kafka_username, "stage-user");
    }

    #[test]
    fn test_resolver_from_env_absent_defaults_to_dev() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.remove(Environment::ENV_VAR);

        let resolver = ConfigResolver::from_env().expect("Should create resolver");
        assert_eq!(resolver.environment(), Environment::Dev);
    }

    #[test]
    fn test_resolver_from_env_blank_defaults_to_dev() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.set(Environment::ENV_VAR, "");

        let resolver = ConfigResolver::from_env().expect("Should create resolver");
        assert_eq!(resolver.environment(), Environment::Dev);
    }

    #[test]
    fn test_resolver_from_env_unknown_fails() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        env.set(Environment::ENV_VAR, "production");

        let err = ConfigResolver::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Unknown environment: production");
    }

    proptest! {
        /// Repeated resolution of the same environment yields structurally
        /// equal settings.
        #[test]
        fn prop_resolution_is_idempotent(
            environment in prop_oneof![Just(Environment::Dev), Just(Environment::Stage)]
        ) {
            prop_assert_eq!(settings_for(environment), settings_for(environment));
        }

        /// Every recognized environment resolves to settings that validate
        /// and carry non-empty endpoints.
        #[test]
        fn prop_resolved_settings_validate(
            environment in prop_oneof![Just(Environment::Dev), Just(Environment::Stage)]
        ) {
            let settings = settings_for(environment);
            prop_assert!(settings.validate().is_ok());
            prop_assert!(!settings.base_url.is_empty());
            prop_assert!(!settings.kafka.bootstrap_servers.is_empty());
        }

        /// Any discriminator outside the recognized set is rejected with the
        /// offending name embedded in the error.
        #[test]
        fn prop_unknown_discriminators_are_rejected(name in "[a-zA-Z0-9_-]{1,12}") {
            prop_assume!(name != "dev" && name != "stage");
            let err = ConfigResolver::new(Some(&name)).unwrap_err();
            prop_assert_eq!(err.to_string(), format!("Unknown environment: {}", name));
        }
    }
}
