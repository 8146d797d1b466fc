// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ability engine configuration section.

use saas_auth::AbilityConfig;
use serde::{Deserialize, Serialize};

/// Ability configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AbilityConfigLayer {
	#[serde(default)]
	pub log_decisions: Option<bool>,
}

impl AbilityConfigLayer {
	pub fn merge(&mut self, other: AbilityConfigLayer) {
		if other.log_decisions.is_some() {
			self.log_decisions = other.log_decisions;
		}
	}

	pub fn finalize(self) -> AbilityConfig {
		AbilityConfig {
			log_decisions: self.log_decisions.unwrap_or(false),
		}
	}
}
