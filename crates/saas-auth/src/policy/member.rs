// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Member policy: read members and projects, create projects, update owned
//! projects, never delete a project.

use crate::ability::{Action, AbilityBuilder, Condition, SubjectType};
use crate::types::UserContext;

pub fn define(user: &UserContext, builder: &mut AbilityBuilder) {
	builder.allow(Action::Get, SubjectType::User, None);
	builder.allow(Action::Get, SubjectType::Project, None);
	builder.allow(Action::Create, SubjectType::Project, None);
	builder.allow(
		Action::Update,
		SubjectType::Project,
		Condition::owned_by(user.user_id),
	);
	builder.deny(Action::Delete, SubjectType::Project, None);
	builder.because("members cannot delete projects");
}
