// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin policy: everything, except changing or handing over an organization
//! the admin does not own.

use crate::ability::{Action, AbilityBuilder, Condition, SubjectMatcher, SubjectType};
use crate::types::UserContext;

pub fn define(user: &UserContext, builder: &mut AbilityBuilder) {
	builder.allow(Action::Manage, SubjectMatcher::All, None);

	builder.deny(Action::TransferOwnership, SubjectType::Organization, None);
	builder.because("only the organization owner can transfer ownership");
	builder.deny(Action::Update, SubjectType::Organization, None);
	builder.because("only the organization owner can update it");

	builder.allow(
		Action::TransferOwnership,
		SubjectType::Organization,
		Condition::owned_by(user.user_id),
	);
	builder.allow(
		Action::Update,
		SubjectType::Organization,
		Condition::owned_by(user.user_id),
	);
}
