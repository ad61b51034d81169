// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The token pair and its on-disk representation.

use serde::{Deserialize, Serialize};
use stroyka_common_secret::SecretString;

/// The access/refresh credential pair held for the current session.
///
/// Both fields are mandatory by construction. The pair is created on login
/// or registration, replaced wholesale on refresh, and destroyed on logout;
/// there is no code path that stores one credential without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
	/// Short-lived bearer token for API calls.
	pub access: SecretString,
	/// Longer-lived token used solely to obtain a new access token.
	pub refresh: SecretString,
}

impl TokenPair {
	/// Build a pair from the raw wire strings.
	pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
		Self {
			access: SecretString::new(access.into()),
			refresh: SecretString::new(refresh.into()),
		}
	}
}

/// On-disk form of the pair (plain JSON strings).
///
/// Kept separate from [`TokenPair`] so the runtime type can redact while the
/// persisted type round-trips faithfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedTokenPair {
	pub access: String,
	pub refresh: String,
}

impl From<PersistedTokenPair> for TokenPair {
	fn from(persisted: PersistedTokenPair) -> Self {
		TokenPair {
			access: SecretString::new(persisted.access),
			refresh: SecretString::new(persisted.refresh),
		}
	}
}

impl From<&TokenPair> for PersistedTokenPair {
	fn from(pair: &TokenPair) -> Self {
		PersistedTokenPair {
			access: pair.access.expose().clone(),
			refresh: pair.refresh.expose().clone(),
		}
	}
}
