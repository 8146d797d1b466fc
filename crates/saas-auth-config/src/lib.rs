// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the saas-auth ability engine.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Consistent environment variable naming (`SAAS_AUTH_*`)
//! - Tracing subscriber setup driven by the `[logging]` section
//!
//! # Usage
//!
//! ```ignore
//! use saas_auth_config::{init_logging, load_config};
//!
//! let config = load_config()?;
//! init_logging(&config.logging)?;
//! let registry = config.policy_registry();
//! ```

pub mod error;
pub mod layer;
pub mod logging;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::AuthConfigLayer;
pub use logging::{env_filter, init_logging};
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use saas_auth::{AbilityConfig, PolicyRegistry};
use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthConfig {
	pub ability: AbilityConfig,
	pub logging: LoggingConfig,
}

impl AuthConfig {
	/// A policy registry using this configuration and the default resolver.
	pub fn policy_registry(&self) -> PolicyRegistry {
		PolicyRegistry::new(self.ability)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`SAAS_AUTH_*`)
/// 2. Config file (`/etc/saas/auth.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<AuthConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<AuthConfig, ConfigError> {
	load_from_sources(vec![Box::new(DefaultsSource), Box::new(EnvSource)])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<AuthConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<AuthConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = AuthConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: AuthConfigLayer) -> Result<AuthConfig, ConfigError> {
	let ability = layer.ability.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	env_filter(&logging)?;

	info!(
		log_decisions = ability.log_decisions,
		log_level = %logging.level,
		log_json = logging.json,
		"Auth configuration loaded"
	);

	Ok(AuthConfig { ability, logging })
}
