// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracing subscriber setup for processes that host the ability engine.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConfigError;
use crate::sections::LoggingConfig;

/// Parses the configured level as an `EnvFilter` directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
	EnvFilter::try_new(&config.level).map_err(|e| ConfigError::InvalidValue {
		key: "logging.level".to_string(),
		message: e.to_string(),
	})
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => env_filter(config)?,
	};

	let registry = tracing_subscriber::registry().with(filter);
	let result = if config.json {
		registry
			.with(tracing_subscriber::fmt::layer().json())
			.try_init()
	} else {
		registry.with(tracing_subscriber::fmt::layer()).try_init()
	};

	result.map_err(|e| ConfigError::Validation(format!("cannot install tracing subscriber: {e}")))
}
