// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Subject instances and the resolver that tags them.
//!
//! [`Subject`] is a closed sum type: the variant is the discriminator. On the
//! JSON boundary the discriminator is the `__typename` field, and
//! [`Subject::from_record`] is the only place a record without one can show
//! up. Queries take a [`SubjectRef`], which is either a bare
//! [`SubjectType`] (type-level check) or a borrowed instance
//! (instance-level, condition-sensitive check).

use super::types::{AttrValue, Attribute, SubjectType};
use crate::error::{AbilityError, Result};
use crate::types::{InviteId, OrgId, ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// JSON field holding the discriminator on persisted records.
pub const DISCRIMINATOR_FIELD: &str = "__typename";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubject {
	pub id: UserId,
}

impl UserSubject {
	pub fn new(id: UserId) -> Self {
		Self { id }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubject {
	pub id: ProjectId,
	pub owner_id: UserId,
	#[serde(default)]
	pub organization_id: Option<OrgId>,
}

impl ProjectSubject {
	pub fn new(id: ProjectId, owner_id: UserId) -> Self {
		Self {
			id,
			owner_id,
			organization_id: None,
		}
	}

	/// Builder: set organization_id.
	pub fn with_organization(mut self, org_id: OrgId) -> Self {
		self.organization_id = Some(org_id);
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSubject {
	pub id: OrgId,
	pub owner_id: UserId,
}

impl OrganizationSubject {
	pub fn new(id: OrgId, owner_id: UserId) -> Self {
		Self { id, owner_id }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteSubject {
	pub id: InviteId,
	pub organization_id: OrgId,
	#[serde(default)]
	pub author_id: Option<UserId>,
}

impl InviteSubject {
	pub fn new(id: InviteId, organization_id: OrgId) -> Self {
		Self {
			id,
			organization_id,
			author_id: None,
		}
	}

	/// Builder: set author_id.
	pub fn with_author(mut self, author_id: UserId) -> Self {
		self.author_id = Some(author_id);
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSubject {
	pub organization_id: OrgId,
}

impl BillingSubject {
	pub fn new(organization_id: OrgId) -> Self {
		Self { organization_id }
	}
}

/// A concrete resource instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Subject {
	User(UserSubject),
	Project(ProjectSubject),
	Organization(OrganizationSubject),
	Invite(InviteSubject),
	Billing(BillingSubject),
}

impl Subject {
	/// The discriminator of this instance.
	pub fn subject_type(&self) -> SubjectType {
		match self {
			Subject::User(_) => SubjectType::User,
			Subject::Project(_) => SubjectType::Project,
			Subject::Organization(_) => SubjectType::Organization,
			Subject::Invite(_) => SubjectType::Invite,
			Subject::Billing(_) => SubjectType::Billing,
		}
	}

	/// Looks up an attribute for condition matching. `None` if this variant
	/// does not carry it or the optional field is unset.
	pub fn attribute(&self, attr: Attribute) -> Option<AttrValue> {
		match (self, attr) {
			(Subject::User(u), Attribute::Id) => Some(u.id.into()),
			(Subject::Project(p), Attribute::Id) => Some(p.id.into()),
			(Subject::Project(p), Attribute::OwnerId) => Some(p.owner_id.into()),
			(Subject::Project(p), Attribute::OrganizationId) => p.organization_id.map(Into::into),
			(Subject::Organization(o), Attribute::Id) => Some(o.id.into()),
			(Subject::Organization(o), Attribute::OwnerId) => Some(o.owner_id.into()),
			(Subject::Invite(i), Attribute::Id) => Some(i.id.into()),
			(Subject::Invite(i), Attribute::OrganizationId) => Some(i.organization_id.into()),
			(Subject::Invite(i), Attribute::AuthorId) => i.author_id.map(Into::into),
			(Subject::Billing(b), Attribute::OrganizationId) => Some(b.organization_id.into()),
			_ => None,
		}
	}

	/// Decodes a persisted record carrying a `__typename` discriminator.
	///
	/// # Errors
	///
	/// - [`AbilityError::MissingDiscriminator`] if the record has no
	///   discriminator (or is not an object)
	/// - [`AbilityError::UnknownSubjectType`] if the discriminator names no
	///   known type
	/// - [`AbilityError::InvalidSubject`] if the attributes do not fit the type
	pub fn from_record(record: serde_json::Value) -> Result<Self> {
		let typename = match record.get(DISCRIMINATOR_FIELD) {
			None | Some(serde_json::Value::Null) => return Err(AbilityError::MissingDiscriminator),
			Some(serde_json::Value::String(s)) => s.clone(),
			Some(other) => return Err(AbilityError::UnknownSubjectType(other.to_string())),
		};
		typename.parse::<SubjectType>()?;

		serde_json::from_value(record).map_err(|e| AbilityError::InvalidSubject {
			typename,
			message: e.to_string(),
		})
	}
}

impl From<UserSubject> for Subject {
	fn from(s: UserSubject) -> Self {
		Subject::User(s)
	}
}

impl From<ProjectSubject> for Subject {
	fn from(s: ProjectSubject) -> Self {
		Subject::Project(s)
	}
}

impl From<OrganizationSubject> for Subject {
	fn from(s: OrganizationSubject) -> Self {
		Subject::Organization(s)
	}
}

impl From<InviteSubject> for Subject {
	fn from(s: InviteSubject) -> Self {
		Subject::Invite(s)
	}
}

impl From<BillingSubject> for Subject {
	fn from(s: BillingSubject) -> Self {
		Subject::Billing(s)
	}
}

/// The subject of a query: a bare type tag or a concrete instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectRef<'a> {
	Type(SubjectType),
	Instance(&'a Subject),
}

impl<'a> SubjectRef<'a> {
	pub fn instance(&self) -> Option<&'a Subject> {
		match self {
			SubjectRef::Type(_) => None,
			SubjectRef::Instance(subject) => Some(subject),
		}
	}
}

impl From<SubjectType> for SubjectRef<'_> {
	fn from(ty: SubjectType) -> Self {
		SubjectRef::Type(ty)
	}
}

impl<'a> From<&'a Subject> for SubjectRef<'a> {
	fn from(subject: &'a Subject) -> Self {
		SubjectRef::Instance(subject)
	}
}

/// Maps a concrete instance to the type tag rules are matched against.
///
/// Supplied once when an ability is built. A resolver error is a
/// configuration error and is returned as such from every query; it is
/// never turned into a denial.
pub trait SubjectResolver: Send + Sync {
	fn resolve(&self, subject: &Subject) -> Result<SubjectType>;
}

/// Resolves by the instance's own variant. Total.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypenameResolver;

impl SubjectResolver for TypenameResolver {
	fn resolve(&self, subject: &Subject) -> Result<SubjectType> {
		Ok(subject.subject_type())
	}
}

impl<F> SubjectResolver for F
where
	F: Fn(&Subject) -> Result<SubjectType> + Send + Sync,
{
	fn resolve(&self, subject: &Subject) -> Result<SubjectType> {
		self(subject)
	}
}
