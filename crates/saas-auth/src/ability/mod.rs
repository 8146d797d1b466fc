// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rules, the builder that accumulates them, and the ability that evaluates
//! them.

pub mod builder;
pub mod engine;
pub mod rule;
pub mod subject;
pub mod types;

pub use builder::AbilityBuilder;
pub use engine::{Ability, Decision};
pub use rule::{Condition, Rule, SubjectMatcher};
pub use subject::{
	BillingSubject, InviteSubject, OrganizationSubject, ProjectSubject, Subject, SubjectRef,
	SubjectResolver, TypenameResolver, UserSubject, DISCRIMINATOR_FIELD,
};
pub use types::{Action, AttrValue, Attribute, SubjectType};
