// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod ability;
mod logging;

pub use ability::AbilityConfigLayer;
pub use logging::{LoggingConfig, LoggingConfigLayer};
