// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Billing policy.

use crate::ability::{Action, AbilityBuilder, SubjectType};
use crate::types::UserContext;

pub fn define(_user: &UserContext, builder: &mut AbilityBuilder) {
	builder.allow(Action::Manage, SubjectType::Billing, None);
}
