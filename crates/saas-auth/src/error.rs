// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the ability engine.
//!
//! Every variant is a configuration error: a missing discriminator, an
//! unknown role, a malformed subject record. A denied check is never an
//! error; it is `Ok(false)` from [`Ability::can`](crate::Ability::can).

use thiserror::Error;

/// Errors raised while building or querying an ability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbilityError {
	/// Subject instance carries no discriminator
	#[error("subject instance has no `__typename` discriminator")]
	MissingDiscriminator,

	/// Discriminator names a type outside the subject catalogue
	#[error("unknown subject type: {0}")]
	UnknownSubjectType(String),

	/// Discriminator is valid but the attributes do not fit the type
	#[error("invalid {typename} subject: {message}")]
	InvalidSubject { typename: String, message: String },

	/// Role has no registered policy
	#[error("permissions for role {0} not found")]
	UnknownRole(String),

	/// Action outside the closed vocabulary
	#[error("unknown action: {0}")]
	UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, AbilityError>;
