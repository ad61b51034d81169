// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for RBAC parsing.

use thiserror::Error;

/// Errors produced when mapping wire data onto the closed RBAC enums.
#[derive(Debug, Error)]
pub enum RbacError {
	/// A role tag the client build does not know.
	#[error("unknown role: {0}")]
	UnknownRole(String),

	/// A capability key the client build does not know.
	#[error("unknown capability: {0}")]
	UnknownCapability(String),
}
