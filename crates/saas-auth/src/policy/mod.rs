// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role policies and the registry that dispatches to them.
//!
//! Every [`Role`] maps to exactly one policy function through an exhaustive
//! `match`, so adding a role without a policy fails to compile. Role names
//! arriving as strings are parsed with [`Role::from_str`](std::str::FromStr),
//! which is where an unregistered role surfaces as
//! [`AbilityError::UnknownRole`](crate::AbilityError::UnknownRole).

pub mod admin;
pub mod billing;
pub mod member;

use crate::ability::{Ability, AbilityBuilder, SubjectResolver, TypenameResolver};
use crate::config::AbilityConfig;
use crate::types::{Role, UserContext, UserId};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Populates a builder with one role's rules for the acting user.
pub type PolicyFn = fn(&UserContext, &mut AbilityBuilder);

/// Read-only mapping from role to policy, plus the resolver and settings every
/// ability built from it shares.
#[derive(Clone)]
pub struct PolicyRegistry {
	resolver: Arc<dyn SubjectResolver>,
	config: AbilityConfig,
}

impl PolicyRegistry {
	pub fn new(config: AbilityConfig) -> Self {
		Self {
			resolver: Arc::new(TypenameResolver),
			config,
		}
	}

	/// Builder: replace the subject resolver.
	pub fn with_resolver(mut self, resolver: Arc<dyn SubjectResolver>) -> Self {
		self.resolver = resolver;
		self
	}

	pub fn config(&self) -> &AbilityConfig {
		&self.config
	}

	/// The policy function for `role`.
	pub fn policy_for(role: Role) -> PolicyFn {
		match role {
			Role::Admin => admin::define,
			Role::Member => member::define,
			Role::Billing => billing::define,
		}
	}

	/// Looks up the role's policy, runs it against a fresh builder, and
	/// freezes the result.
	#[instrument(level = "debug", skip(self, user), fields(role = %role, user_id = %user.user_id))]
	pub fn build_ability(&self, role: Role, user: &UserContext) -> Ability {
		let mut builder = AbilityBuilder::with_config(self.config);
		Self::policy_for(role)(user, &mut builder);
		debug!(rules = builder.len(), "built ability");
		builder.build(Arc::clone(&self.resolver))
	}
}

impl Default for PolicyRegistry {
	fn default() -> Self {
		Self::new(AbilityConfig::default())
	}
}

impl fmt::Debug for PolicyRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PolicyRegistry")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

/// Builds the ability for `user_id` acting as `role` with default settings.
pub fn define_ability_for(user_id: UserId, role: Role) -> Ability {
	PolicyRegistry::default().build_ability(role, &UserContext::new(user_id))
}
