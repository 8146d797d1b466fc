// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Single-use accumulator for a role's rules.

use super::engine::Ability;
use super::rule::{Condition, Rule, SubjectMatcher};
use super::subject::SubjectResolver;
use super::types::Action;
use crate::config::AbilityConfig;
use std::sync::Arc;

/// Appends rules in declaration order, then freezes them into an [`Ability`].
///
/// `build` consumes the builder, so a frozen rule list can never be extended
/// and one builder can never feed two abilities. Create a fresh builder for
/// every authorization context.
#[derive(Debug, Default)]
pub struct AbilityBuilder {
	rules: Vec<Rule>,
	config: AbilityConfig,
}

impl AbilityBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: AbilityConfig) -> Self {
		Self {
			rules: Vec::new(),
			config,
		}
	}

	/// Appends a grant rule.
	pub fn allow(
		&mut self,
		action: Action,
		subject: impl Into<SubjectMatcher>,
		condition: impl Into<Option<Condition>>,
	) {
		self
			.rules
			.push(Rule::grant(action, subject.into(), normalize(condition.into())));
	}

	/// Appends a deny rule.
	pub fn deny(
		&mut self,
		action: Action,
		subject: impl Into<SubjectMatcher>,
		condition: impl Into<Option<Condition>>,
	) {
		self
			.rules
			.push(Rule::deny(action, subject.into(), normalize(condition.into())));
	}

	/// Attaches a reason to the most recently appended rule. Does nothing if
	/// no rule has been appended yet.
	pub fn because(&mut self, reason: impl Into<String>) {
		if let Some(rule) = self.rules.last_mut() {
			rule.reason = Some(reason.into());
		}
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Freezes the accumulated rules, in declaration order, into an ability
	/// bound to `resolver`.
	pub fn build(self, resolver: Arc<dyn SubjectResolver>) -> Ability {
		Ability::new(self.rules, resolver, self.config)
	}
}

// `{}` constrains nothing; storing it as `None` keeps it from blocking
// type-level queries.
fn normalize(condition: Option<Condition>) -> Option<Condition> {
	condition.filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ability::subject::TypenameResolver;
	use crate::ability::types::SubjectType;
	use crate::types::UserId;

	fn resolver() -> Arc<dyn SubjectResolver> {
		Arc::new(TypenameResolver)
	}

	#[test]
	fn preserves_declaration_order() {
		let owner = UserId::generate();
		let mut builder = AbilityBuilder::new();
		builder.allow(Action::Update, SubjectType::Project, None);
		builder.deny(Action::Update, SubjectType::Project, Condition::owned_by(owner));
		builder.allow(Action::Manage, SubjectMatcher::All, None);

		let ability = builder.build(resolver());
		let rules = ability.rules();
		assert_eq!(rules.len(), 3);
		assert!(!rules[0].inverted);
		assert!(rules[1].inverted);
		assert_eq!(rules[1].condition, Some(Condition::owned_by(owner)));
		assert_eq!(rules[2].subject, SubjectMatcher::All);
	}

	#[test]
	fn empty_condition_is_dropped() {
		let mut builder = AbilityBuilder::new();
		builder.allow(Action::Get, SubjectType::Project, Condition::new());
		let ability = builder.build(resolver());
		assert_eq!(ability.rules()[0].condition, None);
		assert!(ability.can(Action::Get, SubjectType::Project).unwrap());
	}

	#[test]
	fn because_annotates_last_rule() {
		let mut builder = AbilityBuilder::new();
		builder.allow(Action::Get, SubjectType::Project, None);
		builder.deny(Action::Delete, SubjectType::Project, None);
		builder.because("projects are deleted by admins");

		let ability = builder.build(resolver());
		assert_eq!(ability.rules()[0].reason, None);
		assert_eq!(
			ability.rules()[1].reason.as_deref(),
			Some("projects are deleted by admins")
		);
	}

	#[test]
	fn because_on_empty_builder_is_ignored() {
		let mut builder = AbilityBuilder::new();
		builder.because("nothing to annotate");
		assert!(builder.is_empty());
	}

	#[test]
	fn fresh_builders_do_not_share_rules() {
		let mut first = AbilityBuilder::new();
		first.allow(Action::Manage, SubjectMatcher::All, None);
		let first = first.build(resolver());

		let second = AbilityBuilder::new().build(resolver());
		assert_eq!(first.len(), 1);
		assert!(second.is_empty());
		assert!(!second.can(Action::Get, SubjectType::User).unwrap());
	}
}
