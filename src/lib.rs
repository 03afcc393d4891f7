//! Todo-Testkit Library
//!
//! Test-support modules for black-box tests of the todo service.

pub mod config;
pub mod logger;

pub use config::{ConfigResolver, Environment, Settings};
