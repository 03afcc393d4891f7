//! Configuration management module for todo-testkit
//!
//! This module resolves the fixed connection settings used by the black-box
//! test suite. Resolution is driven by a single environment discriminator:
//!
//! 1. `TODO_TEST_ENV` environment variable (or an explicit name)
//! 2. Absent or blank discriminators select `dev`
//! 3. Unrecognized discriminators abort suite initialization

pub mod environment;
pub mod error;
pub mod resolver;
pub mod settings;
pub mod validation;

// Re-export public types
pub use environment::Environment;
pub use error::ConfigError;
pub use resolver::{ConfigResolver, settings_for};
pub use settings::{
    KafkaConfig,
    SecurityConfig,
    Settings,
    TopicsConfig,
};
