// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by each source.

use serde::{Deserialize, Serialize};

use crate::sections::{AbilityConfigLayer, LoggingConfigLayer};

/// One source's view of the configuration. Unset sections are `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthConfigLayer {
	#[serde(default)]
	pub ability: Option<AbilityConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl AuthConfigLayer {
	/// Overlays `other` onto `self`; fields set in `other` win.
	pub fn merge(&mut self, other: AuthConfigLayer) {
		merge_section(&mut self.ability, other.ability, AbilityConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(current: &mut Option<T>, incoming: Option<T>, merge: fn(&mut T, T)) {
	let Some(incoming) = incoming else {
		return;
	};
	*current = Some(match current.take() {
		Some(mut existing) => {
			merge(&mut existing, incoming);
			existing
		}
		None => incoming,
	});
}
