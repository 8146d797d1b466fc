// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Closed vocabularies the rules are written in.
//!
//! - [`Action`]: the operation being authorized; [`Action::Manage`] is the
//!   wildcard matching any action
//! - [`SubjectType`]: the canonical type tag of a resource, with the action
//!   vocabulary each type supports
//! - [`Attribute`] / [`AttrValue`]: the attribute names and primitive values
//!   conditions compare against

use crate::error::AbilityError;
use crate::types::{InviteId, OrgId, ProjectId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Operations that can be authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	/// Wildcard: matches every action.
	Manage,
	Get,
	Create,
	Update,
	Delete,
	TransferOwnership,
	Export,
}

impl Action {
	/// Returns all actions, wildcard first.
	pub fn all() -> &'static [Action] {
		&[
			Action::Manage,
			Action::Get,
			Action::Create,
			Action::Update,
			Action::Delete,
			Action::TransferOwnership,
			Action::Export,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Action::Manage => "manage",
			Action::Get => "get",
			Action::Create => "create",
			Action::Update => "update",
			Action::Delete => "delete",
			Action::TransferOwnership => "transfer_ownership",
			Action::Export => "export",
		}
	}

	/// Returns true if a rule declared for `self` covers a query for `action`.
	pub fn covers(&self, action: Action) -> bool {
		*self == Action::Manage || *self == action
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Action {
	type Err = AbilityError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Action::all()
			.iter()
			.copied()
			.find(|a| a.as_str() == s)
			.ok_or_else(|| AbilityError::UnknownAction(s.to_string()))
	}
}

/// Canonical type tags of the resources rules are declared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubjectType {
	User,
	Project,
	Organization,
	Invite,
	Billing,
}

impl SubjectType {
	/// Returns all subject types.
	pub fn all() -> &'static [SubjectType] {
		&[
			SubjectType::User,
			SubjectType::Project,
			SubjectType::Organization,
			SubjectType::Invite,
			SubjectType::Billing,
		]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			SubjectType::User => "User",
			SubjectType::Project => "Project",
			SubjectType::Organization => "Organization",
			SubjectType::Invite => "Invite",
			SubjectType::Billing => "Billing",
		}
	}

	/// The actions that make sense for this type. Always includes the wildcard.
	pub fn actions(&self) -> &'static [Action] {
		match self {
			SubjectType::User => &[Action::Manage, Action::Get, Action::Update, Action::Delete],
			SubjectType::Project => &[
				Action::Manage,
				Action::Get,
				Action::Create,
				Action::Update,
				Action::Delete,
			],
			SubjectType::Organization => &[
				Action::Manage,
				Action::Update,
				Action::Delete,
				Action::TransferOwnership,
			],
			SubjectType::Invite => &[Action::Manage, Action::Get, Action::Create, Action::Delete],
			SubjectType::Billing => &[Action::Manage, Action::Get, Action::Export],
		}
	}

	/// Returns true if `action` belongs to this type's vocabulary.
	pub fn supports(&self, action: Action) -> bool {
		self.actions().contains(&action)
	}
}

impl fmt::Display for SubjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SubjectType {
	type Err = AbilityError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SubjectType::all()
			.iter()
			.copied()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| AbilityError::UnknownSubjectType(s.to_string()))
	}
}

/// Attribute names a condition can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
	Id,
	OwnerId,
	OrganizationId,
	AuthorId,
}

impl fmt::Display for Attribute {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Attribute::Id => f.write_str("id"),
			Attribute::OwnerId => f.write_str("ownerId"),
			Attribute::OrganizationId => f.write_str("organizationId"),
			Attribute::AuthorId => f.write_str("authorId"),
		}
	}
}

/// A primitive attribute value.
///
/// Equality is variant-sensitive: `Id(u)` never equals `Text(u.to_string())`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AttrValue {
	Id(Uuid),
	Text(String),
	Bool(bool),
	Int(i64),
}

impl From<Uuid> for AttrValue {
	fn from(id: Uuid) -> Self {
		AttrValue::Id(id)
	}
}

impl From<UserId> for AttrValue {
	fn from(id: UserId) -> Self {
		AttrValue::Id(id.into_inner())
	}
}

impl From<ProjectId> for AttrValue {
	fn from(id: ProjectId) -> Self {
		AttrValue::Id(id.into_inner())
	}
}

impl From<OrgId> for AttrValue {
	fn from(id: OrgId) -> Self {
		AttrValue::Id(id.into_inner())
	}
}

impl From<InviteId> for AttrValue {
	fn from(id: InviteId) -> Self {
		AttrValue::Id(id.into_inner())
	}
}

impl From<&str> for AttrValue {
	fn from(s: &str) -> Self {
		AttrValue::Text(s.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(s: String) -> Self {
		AttrValue::Text(s)
	}
}

impl From<bool> for AttrValue {
	fn from(b: bool) -> Self {
		AttrValue::Bool(b)
	}
}

impl From<i64> for AttrValue {
	fn from(n: i64) -> Self {
		AttrValue::Int(n)
	}
}

impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Id(id) => write!(f, "{id}"),
			AttrValue::Text(s) => write!(f, "{s:?}"),
			AttrValue::Bool(b) => write!(f, "{b}"),
			AttrValue::Int(n) => write!(f, "{n}"),
		}
	}
}
