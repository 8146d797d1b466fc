// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ability query evaluation.
//!
//! An [`Ability`] answers `can(action, subject)` against a frozen, ordered
//! rule list:
//!
//! 1. **Resolve**: a type tag is used as-is; an instance goes through the
//!    [`SubjectResolver`]. Resolver failure is returned as an error.
//! 2. **Match**: a rule matches when its subject matcher covers the type, its
//!    action covers the query action, and its condition (if any) holds on the
//!    instance. Conditions never hold for type-level queries.
//! 3. **Decide**: the last matching rule wins; with no match the answer is
//!    deny.

use super::rule::Rule;
use super::subject::{SubjectRef, SubjectResolver};
use super::types::{Action, SubjectType};
use crate::config::AbilityConfig;
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a query, carrying the deciding rule's reason on denial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
	Allowed,
	Denied { reason: Option<String> },
}

impl Decision {
	pub fn is_allowed(&self) -> bool {
		matches!(self, Decision::Allowed)
	}

	pub fn is_denied(&self) -> bool {
		!self.is_allowed()
	}

	/// The denial reason, if the deciding deny rule carried one.
	pub fn reason(&self) -> Option<&str> {
		match self {
			Decision::Allowed => None,
			Decision::Denied { reason } => reason.as_deref(),
		}
	}
}

/// Immutable compiled rule list. Cheap to clone; safe to share across
/// threads.
#[derive(Clone)]
pub struct Ability {
	rules: Arc<[Rule]>,
	resolver: Arc<dyn SubjectResolver>,
	config: AbilityConfig,
}

impl Ability {
	pub(crate) fn new(
		rules: Vec<Rule>,
		resolver: Arc<dyn SubjectResolver>,
		config: AbilityConfig,
	) -> Self {
		Self {
			rules: rules.into(),
			resolver,
			config,
		}
	}

	/// Returns true if `action` is permitted on `subject`.
	///
	/// # Errors
	///
	/// Only configuration errors from the subject resolver. A denial is
	/// `Ok(false)`.
	pub fn can<'a>(&self, action: Action, subject: impl Into<SubjectRef<'a>>) -> Result<bool> {
		Ok(self.decide(action, subject)?.is_allowed())
	}

	/// Exactly `!can(action, subject)`.
	pub fn cannot<'a>(&self, action: Action, subject: impl Into<SubjectRef<'a>>) -> Result<bool> {
		self.can(action, subject).map(|allowed| !allowed)
	}

	/// Like [`can`](Self::can), but keeps the deciding rule's reason.
	pub fn decide<'a>(&self, action: Action, subject: impl Into<SubjectRef<'a>>) -> Result<Decision> {
		let subject = subject.into();
		let (subject_type, index) = self.find(action, subject)?;

		let decision = match index.map(|i| &self.rules[i]) {
			Some(rule) if rule.allows() => Decision::Allowed,
			Some(rule) => Decision::Denied {
				reason: rule.reason.clone(),
			},
			None => Decision::Denied { reason: None },
		};

		if self.config.log_decisions {
			debug!(
				action = %action,
				subject_type = %subject_type,
				instance = subject.instance().is_some(),
				allowed = decision.is_allowed(),
				rule_index = ?index,
				"ability decision"
			);
		}

		Ok(decision)
	}

	/// The rule that decides the query, or `None` under default deny.
	pub fn relevant_rule<'a>(
		&self,
		action: Action,
		subject: impl Into<SubjectRef<'a>>,
	) -> Result<Option<&Rule>> {
		let (_, index) = self.find(action, subject.into())?;
		Ok(index.map(|i| &self.rules[i]))
	}

	/// The rules in declaration order.
	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	fn find(&self, action: Action, subject: SubjectRef<'_>) -> Result<(SubjectType, Option<usize>)> {
		let subject_type = match subject {
			SubjectRef::Type(ty) => ty,
			SubjectRef::Instance(instance) => self.resolver.resolve(instance)?,
		};
		let instance = subject.instance();

		// Last match wins, so scanning from the back can stop at the first hit.
		let index = self
			.rules
			.iter()
			.rposition(|rule| rule.matches(action, subject_type, instance));

		Ok((subject_type, index))
	}
}

impl fmt::Debug for Ability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Ability")
			.field("rules", &self.rules)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
