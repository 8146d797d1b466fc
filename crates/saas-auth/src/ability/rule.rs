// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The atomic grant/deny statement and its matchers.

use super::subject::Subject;
use super::types::{Action, AttrValue, Attribute, SubjectType};
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which subject types a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectMatcher {
	/// Wildcard: every subject type.
	All,
	Type(SubjectType),
	AnyOf(Vec<SubjectType>),
}

impl SubjectMatcher {
	pub fn matches(&self, subject_type: SubjectType) -> bool {
		match self {
			SubjectMatcher::All => true,
			SubjectMatcher::Type(ty) => *ty == subject_type,
			SubjectMatcher::AnyOf(types) => types.contains(&subject_type),
		}
	}
}

impl From<SubjectType> for SubjectMatcher {
	fn from(ty: SubjectType) -> Self {
		SubjectMatcher::Type(ty)
	}
}

impl<const N: usize> From<[SubjectType; N]> for SubjectMatcher {
	fn from(types: [SubjectType; N]) -> Self {
		SubjectMatcher::AnyOf(types.to_vec())
	}
}

impl From<Vec<SubjectType>> for SubjectMatcher {
	fn from(types: Vec<SubjectType>) -> Self {
		SubjectMatcher::AnyOf(types)
	}
}

/// Attribute-equality constraint. Every entry must equal the instance's
/// attribute exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition {
	attrs: BTreeMap<Attribute, AttrValue>,
}

impl Condition {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shorthand for `ownerId = user_id`.
	pub fn owned_by(user_id: UserId) -> Self {
		Self::new().with(Attribute::OwnerId, user_id)
	}

	/// Builder: require `attr` to equal `value`.
	pub fn with(mut self, attr: Attribute, value: impl Into<AttrValue>) -> Self {
		self.attrs.insert(attr, value.into());
		self
	}

	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Attribute, &AttrValue)> {
		self.attrs.iter()
	}

	/// Returns true if every constrained attribute is present on `subject`
	/// with an equal value.
	pub fn matches(&self, subject: &Subject) -> bool {
		self
			.attrs
			.iter()
			.all(|(attr, expected)| subject.attribute(*attr).as_ref() == Some(expected))
	}
}

/// One grant (`inverted == false`) or deny (`inverted == true`) statement.
///
/// Rules are only created through [`AbilityBuilder`](super::AbilityBuilder)
/// and are immutable once the builder is frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
	pub action: Action,
	pub subject: SubjectMatcher,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub condition: Option<Condition>,
	pub inverted: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
}

impl Rule {
	pub(crate) fn grant(action: Action, subject: SubjectMatcher, condition: Option<Condition>) -> Self {
		Self {
			action,
			subject,
			condition,
			inverted: false,
			reason: None,
		}
	}

	pub(crate) fn deny(action: Action, subject: SubjectMatcher, condition: Option<Condition>) -> Self {
		Self {
			action,
			subject,
			condition,
			inverted: true,
			reason: None,
		}
	}

	/// Returns true if this rule applies to the query.
	///
	/// A conditioned rule never matches a type-level query (`instance` is
	/// `None`): there are no attributes to check.
	pub fn matches(&self, action: Action, subject_type: SubjectType, instance: Option<&Subject>) -> bool {
		if !self.subject.matches(subject_type) || !self.action.covers(action) {
			return false;
		}

		match (&self.condition, instance) {
			(None, _) => true,
			(Some(_), None) => false,
			(Some(condition), Some(subject)) => condition.matches(subject),
		}
	}

	/// The outcome this rule produces when it matches.
	pub fn allows(&self) -> bool {
		!self.inverted
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ability::subject::{OrganizationSubject, ProjectSubject};
	use crate::types::{OrgId, ProjectId};

	fn project_owned_by(owner: UserId) -> Subject {
		ProjectSubject::new(ProjectId::generate(), owner).into()
	}

	mod subject_matcher {
		use super::*;

		#[test]
		fn all_matches_every_type() {
			for ty in SubjectType::all() {
				assert!(SubjectMatcher::All.matches(*ty));
			}
		}

		#[test]
		fn literal_matches_only_its_type() {
			let matcher = SubjectMatcher::from(SubjectType::Project);
			assert!(matcher.matches(SubjectType::Project));
			assert!(!matcher.matches(SubjectType::Organization));
		}

		#[test]
		fn set_matches_members() {
			let matcher = SubjectMatcher::from([SubjectType::Project, SubjectType::Invite]);
			assert!(matcher.matches(SubjectType::Project));
			assert!(matcher.matches(SubjectType::Invite));
			assert!(!matcher.matches(SubjectType::User));
		}
	}

	mod condition {
		use super::*;

		#[test]
		fn owned_by_matches_owner_only() {
			let owner = UserId::generate();
			let condition = Condition::owned_by(owner);
			assert!(condition.matches(&project_owned_by(owner)));
			assert!(!condition.matches(&project_owned_by(UserId::generate())));
		}

		#[test]
		fn every_attribute_must_match() {
			let owner = UserId::generate();
			let org_id = OrgId::generate();
			let condition = Condition::owned_by(owner).with(Attribute::OrganizationId, org_id);

			let in_org: Subject = ProjectSubject::new(ProjectId::generate(), owner)
				.with_organization(org_id)
				.into();
			let elsewhere: Subject = ProjectSubject::new(ProjectId::generate(), owner)
				.with_organization(OrgId::generate())
				.into();

			assert!(condition.matches(&in_org));
			assert!(!condition.matches(&elsewhere));
			assert!(!condition.matches(&project_owned_by(owner)));
		}

		#[test]
		fn text_spelling_of_id_does_not_match() {
			let owner = UserId::generate();
			let condition = Condition::new().with(Attribute::OwnerId, owner.to_string());
			assert!(!condition.matches(&project_owned_by(owner)));
		}

		#[test]
		fn missing_attribute_never_matches() {
			let condition = Condition::new().with(Attribute::AuthorId, UserId::generate());
			assert!(!condition.matches(&project_owned_by(UserId::generate())));
		}

		#[test]
		fn empty_condition_matches_any_instance() {
			assert!(Condition::new().matches(&project_owned_by(UserId::generate())));
		}
	}

	mod rule_matching {
		use super::*;

		#[test]
		fn manage_all_matches_anything() {
			let rule = Rule::grant(Action::Manage, SubjectMatcher::All, None);
			for ty in SubjectType::all() {
				for action in Action::all() {
					assert!(rule.matches(*action, *ty, None));
				}
			}
		}

		#[test]
		fn action_mismatch_does_not_match() {
			let rule = Rule::grant(Action::Get, SubjectType::Project.into(), None);
			assert!(!rule.matches(Action::Update, SubjectType::Project, None));
		}

		#[test]
		fn query_for_manage_needs_manage_rule() {
			let rule = Rule::grant(Action::Update, SubjectType::Project.into(), None);
			assert!(!rule.matches(Action::Manage, SubjectType::Project, None));
		}

		#[test]
		fn conditioned_rule_never_matches_type_query() {
			let owner = UserId::generate();
			let rule = Rule::grant(
				Action::Update,
				SubjectType::Project.into(),
				Some(Condition::owned_by(owner)),
			);
			assert!(!rule.matches(Action::Update, SubjectType::Project, None));
			assert!(rule.matches(
				Action::Update,
				SubjectType::Project,
				Some(&project_owned_by(owner))
			));
		}

		#[test]
		fn deny_rule_produces_false() {
			let rule = Rule::deny(Action::Delete, SubjectType::Project.into(), None);
			assert!(rule.inverted);
			assert!(!rule.allows());
		}

		#[test]
		fn condition_checked_against_resolved_instance() {
			let owner = UserId::generate();
			let rule = Rule::grant(
				Action::Update,
				SubjectType::Organization.into(),
				Some(Condition::owned_by(owner)),
			);
			let org: Subject = OrganizationSubject::new(OrgId::generate(), owner).into();
			assert!(rule.matches(Action::Update, SubjectType::Organization, Some(&org)));
		}
	}

	#[test]
	fn rule_serializes_for_audit() {
		let owner = UserId::generate();
		let rule = Rule::deny(
			Action::Delete,
			SubjectType::Project.into(),
			Some(Condition::owned_by(owner)),
		);
		let value = serde_json::to_value(&rule).unwrap();
		assert_eq!(value["action"], "delete");
		assert_eq!(value["subject"], serde_json::json!({ "type": "Project" }));
		assert_eq!(value["inverted"], true);
		assert_eq!(value["condition"]["ownerId"]["kind"], "id");
		assert!(value.get("reason").is_none());

		let back: Rule = serde_json::from_value(value).unwrap();
		assert_eq!(back, rule);
	}
}
