// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core identity types shared by the ability engine.
//!
//! - **ID newtypes**: Type-safe wrappers around UUIDs for each entity kind
//!   ([`UserId`], [`ProjectId`], [`OrgId`], [`InviteId`]) preventing accidental
//!   mixing at the API boundary
//! - **Roles**: The closed membership role enumeration ([`Role`])
//! - **User context**: The acting user a policy is parameterised with
//!   ([`UserContext`])

use crate::error::AbilityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(Uuid);

		impl $name {
			/// Create a new ID from a UUID.
			pub fn new(id: Uuid) -> Self {
				Self(id)
			}

			/// Generate a new random ID.
			pub fn generate() -> Self {
				Self(Uuid::new_v4())
			}

			/// Get the inner UUID value.
			pub fn into_inner(self) -> Uuid {
				self.0
			}

			/// Get a reference to the inner UUID.
			pub fn as_uuid(&self) -> &Uuid {
				&self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}", self.0)
			}
		}

		impl From<Uuid> for $name {
			fn from(id: Uuid) -> Self {
				Self(id)
			}
		}

		impl From<$name> for Uuid {
			fn from(id: $name) -> Self {
				id.0
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a user.");
define_id_type!(ProjectId, "Unique identifier for a project.");
define_id_type!(OrgId, "Unique identifier for an organization.");
define_id_type!(InviteId, "Unique identifier for an invite.");

// =============================================================================
// Roles
// =============================================================================

/// Membership roles within an organization. Each role has exactly one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
	/// Manages everything except organizations they do not own.
	Admin,
	/// Works on projects; may only change projects they own.
	Member,
	/// Billing access only.
	Billing,
}

impl Role {
	/// Returns all available roles.
	pub fn all() -> &'static [Role] {
		&[Role::Admin, Role::Member, Role::Billing]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Admin => "ADMIN",
			Role::Member => "MEMBER",
			Role::Billing => "BILLING",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = AbilityError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ADMIN" => Ok(Role::Admin),
			"MEMBER" => Ok(Role::Member),
			"BILLING" => Ok(Role::Billing),
			other => Err(AbilityError::UnknownRole(other.to_string())),
		}
	}
}

// =============================================================================
// User Context
// =============================================================================

/// The acting user a role policy is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserContext {
	pub user_id: UserId,
}

impl UserContext {
	pub fn new(user_id: UserId) -> Self {
		Self { user_id }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn role_display_matches_wire_spelling() {
		assert_eq!(Role::Admin.to_string(), "ADMIN");
		assert_eq!(Role::Member.to_string(), "MEMBER");
		assert_eq!(Role::Billing.to_string(), "BILLING");
	}

	#[test]
	fn role_parses_every_variant() {
		for role in Role::all() {
			assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
		}
	}

	#[test]
	fn unknown_role_is_a_configuration_error() {
		let err = "OWNER".parse::<Role>().unwrap_err();
		assert_eq!(err, AbilityError::UnknownRole("OWNER".to_string()));
		assert_eq!(err.to_string(), "permissions for role OWNER not found");
	}

	#[test]
	fn role_parsing_is_case_sensitive() {
		assert!("admin".parse::<Role>().is_err());
	}

	#[test]
	fn role_serde_uses_upper_case() {
		let json = serde_json::to_string(&Role::Member).unwrap();
		assert_eq!(json, "\"MEMBER\"");
		let parsed: Role = serde_json::from_str("\"BILLING\"").unwrap();
		assert_eq!(parsed, Role::Billing);
	}

	#[test]
	fn user_id_serializes_transparently() {
		let uuid = Uuid::new_v4();
		let json = serde_json::to_string(&UserId::new(uuid)).unwrap();
		assert_eq!(json, format!("\"{uuid}\""));
	}

	proptest! {
		#[test]
		fn user_id_roundtrip_any_uuid(a: u128) {
			let uuid = Uuid::from_u128(a);
			let user_id = UserId::new(uuid);
			prop_assert_eq!(user_id.into_inner(), uuid);
			prop_assert_eq!(Uuid::from(user_id), uuid);
		}
	}
}
