// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rule-based authorization for organization members.
//!
//! A role's policy is a plain function that declares `allow`/`deny` rules on
//! an [`AbilityBuilder`]. The builder is frozen into an immutable [`Ability`]
//! that answers `can(action, subject)`:
//!
//! ```text
//! Role ──► PolicyRegistry::policy_for ──► fresh AbilityBuilder ──► build() ──► Ability
//!                                                                              │
//!                                              can(action, subject) ◄──────────┘
//! ```
//!
//! Evaluation is default-deny and the last matching rule wins, so a policy
//! states a broad grant first and narrows it with later exceptions.
//!
//! # Example
//!
//! ```
//! use saas_auth::{define_ability_for, Action, ProjectSubject, ProjectId, Role, Subject, SubjectType, UserId};
//!
//! let user_id = UserId::generate();
//! let ability = define_ability_for(user_id, Role::Member);
//!
//! let own = Subject::from(ProjectSubject::new(ProjectId::generate(), user_id));
//! assert!(ability.can(Action::Update, &own)?);
//! assert!(ability.cannot(Action::Delete, &own)?);
//! assert!(ability.can(Action::Get, SubjectType::Project)?);
//! # Ok::<(), saas_auth::AbilityError>(())
//! ```

pub mod ability;
pub mod config;
pub mod error;
pub mod policy;
pub mod types;

pub use ability::{
	Ability, AbilityBuilder, Action, AttrValue, Attribute, BillingSubject, Condition, Decision,
	InviteSubject, OrganizationSubject, ProjectSubject, Rule, Subject, SubjectMatcher, SubjectRef,
	SubjectResolver, SubjectType, TypenameResolver, UserSubject, DISCRIMINATOR_FIELD,
};
pub use config::AbilityConfig;
pub use error::{AbilityError, Result};
pub use policy::{define_ability_for, PolicyFn, PolicyRegistry};
pub use types::{InviteId, OrgId, ProjectId, Role, UserContext, UserId};
